//! Authentication and authorization helpers.
//!
//! This module provides the read side of a role-based access-control model:
//! - Password hashing and verification (unsalted SHA-256, hex)
//! - Permission resolution through a user's role
//! - Current-user resolution from a session user id
//!
//! # Authorization
//!
//! A user holds exactly one role, and a role bundles any number of permissions. A permission is
//! exposed as `"<module>.<name>"`. Only users whose status is `activo` resolve to anything.
//!
//! # Modules
//!
//! - [`current_user`]: load the session's user with its permissions
//! - [`password`]: password hashing and verification
//! - [`permissions`]: permission lookup and membership checks
//! - [`session`]: read-only access to the caller's session store
//!
//! # Usage
//!
//! ```ignore
//! use accessctl::{auth::AccessControl, db::Database};
//!
//! let access = AccessControl::new(Database::new(Some(config.database.clone())));
//!
//! if access.has_permission(user_id, "usuarios.editar").await {
//!     // ...
//! }
//!
//! let user = access.current_user(session_user_id).await;
//! ```

pub mod current_user;
pub mod password;
pub mod permissions;
pub mod session;

use crate::db::ConnectionSource;
use crate::types::UserId;
use current_user::CurrentUser;
use session::SessionStore;

/// Resolvers bound to one connection source.
#[derive(Debug, Clone)]
pub struct AccessControl<S> {
    source: S,
}

impl<S: ConnectionSource> AccessControl<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn permissions_for(&self, user_id: UserId) -> Vec<String> {
        permissions::permissions_for(&self.source, user_id).await
    }

    pub async fn has_permission(&self, user_id: UserId, permission: &str) -> bool {
        permissions::has_permission(&self.source, user_id, permission).await
    }

    pub async fn current_user(&self, session_user_id: Option<UserId>) -> Option<CurrentUser> {
        current_user::current_user(&self.source, session_user_id).await
    }

    pub async fn current_user_from_session<T: SessionStore + ?Sized>(&self, session: &T) -> Option<CurrentUser> {
        current_user::current_user_from_session(&self.source, session).await
    }
}
