//! Database models for users.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{RoleId, UserId};

/// An active user joined with its role
///
/// The query names its columns instead of selecting `u.*`: `usuarios` must have `nombre` and
/// `email`, and `roles` must have `nombre` and `descripcion`. A schema missing any of them makes
/// every lookup fail, which the current-user resolver reports as no user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserDBResponse {
    pub id: UserId,
    pub nombre: String,
    pub email: Option<String>,
    pub rol_id: RoleId,
    pub rol_nombre: String,
    pub rol_descripcion: Option<String>,
}
