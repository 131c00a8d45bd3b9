//! Permission resolution.
//!
//! A user's permissions are whatever its role grants, as dotted `"<module>.<name>"` strings.
//! Resolution never fails from the caller's point of view: with no connection, or on a query
//! error, the user simply has no permissions. Callers making access decisions therefore fail
//! closed.

use tracing::{debug, error, instrument};

use crate::db::{ConnectionSource, handlers::Permissions, models::permissions::PermissionDBResponse};
use crate::types::UserId;

/// Permissions granted to `user_id`, in database result order.
///
/// Empty for inactive or unknown users, and when the database can't be reached or queried.
#[instrument(skip(source))]
pub async fn permissions_for<S: ConnectionSource + ?Sized>(source: &S, user_id: UserId) -> Vec<String> {
    let Some(mut conn) = source.acquire().await else {
        debug!("No database connection, resolving no permissions");
        return Vec::new();
    };

    let result = Permissions::new(&mut conn).for_user(user_id).await;
    conn.release().await;

    match result {
        Ok(rows) => rows.iter().map(PermissionDBResponse::qualified_name).collect(),
        Err(e) => {
            error!(error = %e, "Failed to resolve permissions");
            Vec::new()
        }
    }
}

/// Whether `permission` is among the permissions resolved for `user_id`.
pub async fn has_permission<S: ConnectionSource + ?Sized>(source: &S, user_id: UserId, permission: &str) -> bool {
    permissions_for(source, user_id).await.iter().any(|p| p == permission)
}
