//! Common type definitions.
//!
//! # ID Types
//!
//! All entity IDs are integer primary keys wrapped in type aliases so signatures say which
//! table they refer to:
//!
//! - [`UserId`]: row in `usuarios`
//! - [`RoleId`]: row in `roles`
//!
//! # Permission strings
//!
//! A permission is exposed to callers in its dotted form `"<module>.<name>"`, see
//! [`permission_string`].

pub type UserId = i64;
pub type RoleId = i64;

/// Status value of a user allowed to authenticate and hold permissions.
pub const ACTIVE_STATUS: &str = "activo";

/// Build the dotted, externally visible form of a permission.
pub fn permission_string(module: &str, name: &str) -> String {
    format!("{module}.{name}")
}
