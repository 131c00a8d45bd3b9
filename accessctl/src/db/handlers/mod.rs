//! Repository implementations for database access.
//!
//! Repositories wrap a borrowed connection and issue the read queries this crate needs. They
//! return [`crate::db::errors::DbError`] and leave degradation (empty results, `None`) to the
//! callers in [`crate::auth`].
//!
//! # Available Repositories
//!
//! - [`Users`]: active users joined with their role
//! - [`Permissions`]: permissions granted to a user through its role
//!
//! # Common Pattern
//!
//! ```ignore
//! use accessctl::db::handlers::Permissions;
//!
//! let mut conn = database.connect().await.ok_or("no connection")?;
//! let rows = Permissions::new(&mut conn).for_user(user_id).await;
//! conn.release().await;
//! ```

pub mod permissions;
pub mod users;

pub use permissions::Permissions;
pub use users::Users;
