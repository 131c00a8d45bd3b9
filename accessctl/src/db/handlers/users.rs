//! Database repository for users.

use sqlx::AnyConnection;
use tracing::instrument;

use crate::db::{errors::Result, models::users::UserDBResponse};
use crate::types::{ACTIVE_STATUS, UserId};

pub struct Users<'c> {
    db: &'c mut AnyConnection,
}

impl<'c> Users<'c> {
    pub fn new(db: &'c mut AnyConnection) -> Self {
        Self { db }
    }

    /// Fetch a user together with its role, only if the user is active.
    ///
    /// Text columns are cast to `CHAR`: MySQL reports `TEXT` as a blob type, which the `Any`
    /// driver refuses to decode into `String`.
    #[instrument(skip(self), err)]
    pub async fn get_active_user(&mut self, id: UserId) -> Result<Option<UserDBResponse>> {
        let user = sqlx::query_as::<_, UserDBResponse>(
            r#"
            SELECT u.id, CAST(u.nombre AS CHAR) AS nombre, CAST(u.email AS CHAR) AS email, u.rol_id,
                   CAST(r.nombre AS CHAR) AS rol_nombre,
                   CAST(r.descripcion AS CHAR) AS rol_descripcion
            FROM usuarios u
            JOIN roles r ON u.rol_id = r.id
            WHERE u.id = ? AND u.estado = ?
            "#,
        )
        .bind(id)
        .bind(ACTIVE_STATUS)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(user)
    }
}
