//! Current-user resolution.
//!
//! Given the user id taken from the caller's session, load the active user with its role and
//! attach the permissions resolved through [`crate::auth::permissions`]. Every failure path
//! (no session, no connection, unknown or inactive user, query error) yields `None`, which the
//! caller treats as "not authenticated".

use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, trace};

use crate::auth::permissions::permissions_for;
use crate::auth::session::{SessionStore, session_user_id};
use crate::db::{ConnectionSource, handlers::Users, models::users::UserDBResponse};
use crate::types::UserId;

/// The authenticated user, with permissions resolved at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(flatten)]
    pub user: UserDBResponse,
    /// Not persisted; recomputed on every load
    pub permissions: Vec<String>,
}

impl CurrentUser {
    pub fn id(&self) -> UserId {
        self.user.id
    }

    /// Membership test against the permissions resolved when this user was loaded.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// Resolve the user behind a session user id.
#[instrument(skip(source))]
pub async fn current_user<S: ConnectionSource + ?Sized>(source: &S, session_user_id: Option<UserId>) -> Option<CurrentUser> {
    let Some(user_id) = session_user_id else {
        trace!("No user in session");
        return None;
    };

    let Some(mut conn) = source.acquire().await else {
        debug!("No database connection, no current user");
        return None;
    };

    let result = Users::new(&mut conn).get_active_user(user_id).await;
    // A request holds at most one connection at a time
    conn.release().await;

    match result {
        Ok(Some(user)) => {
            let permissions = permissions_for(source, user.id).await;
            Some(CurrentUser { user, permissions })
        }
        Ok(None) => {
            debug!("Session user is unknown or inactive");
            None
        }
        Err(e) => {
            error!(error = %e, "Failed to load current user");
            None
        }
    }
}

/// Resolve the user whose id is stored in `session`.
pub async fn current_user_from_session<S, T>(source: &S, session: &T) -> Option<CurrentUser>
where
    S: ConnectionSource + ?Sized,
    T: SessionStore + ?Sized,
{
    let user_id = session_user_id(session);
    current_user(source, user_id).await
}
