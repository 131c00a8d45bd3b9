//! Database record models matching table schemas.
//!
//! These structs correspond to the rows returned by the read queries in
//! [`crate::db::handlers`]. They derive `sqlx::FromRow` and only use column types the `Any`
//! driver can decode on every backend (integers and text).
//!
//! # Tables
//!
//! - `usuarios(id, rol_id, estado, nombre, email, ...)`
//! - `roles(id, nombre, descripcion)`
//! - `permisos(id, nombre, modulo)`
//! - `rol_permisos(rol_id, permiso_id)`
//!
//! # Models
//!
//! - [`users`]: an active user joined with its role
//! - [`permissions`]: a permission granted through a role

pub mod permissions;
pub mod users;
