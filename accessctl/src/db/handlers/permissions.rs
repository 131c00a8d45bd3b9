//! Database repository for permissions.

use sqlx::AnyConnection;
use tracing::instrument;

use crate::db::{errors::Result, models::permissions::PermissionDBResponse};
use crate::types::{ACTIVE_STATUS, UserId};

pub struct Permissions<'c> {
    db: &'c mut AnyConnection,
}

impl<'c> Permissions<'c> {
    pub fn new(db: &'c mut AnyConnection) -> Self {
        Self { db }
    }

    /// Permissions granted to an active user through its role, in database order.
    ///
    /// Inactive or unknown users have none. Names are cast to `CHAR` so `TEXT` columns decode
    /// on MySQL.
    #[instrument(skip(self), err)]
    pub async fn for_user(&mut self, user_id: UserId) -> Result<Vec<PermissionDBResponse>> {
        let permissions = sqlx::query_as::<_, PermissionDBResponse>(
            r#"
            SELECT CAST(p.nombre AS CHAR) AS nombre, CAST(p.modulo AS CHAR) AS modulo
            FROM usuarios u
            JOIN roles r ON u.rol_id = r.id
            JOIN rol_permisos rp ON r.id = rp.rol_id
            JOIN permisos p ON rp.permiso_id = p.id
            WHERE u.id = ? AND u.estado = ?
            "#,
        )
        .bind(user_id)
        .bind(ACTIVE_STATUS)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(permissions)
    }
}
