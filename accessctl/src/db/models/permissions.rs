//! Database models for permissions.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::permission_string;

/// A permission row as returned by the role join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PermissionDBResponse {
    pub nombre: String,
    pub modulo: String,
}

impl PermissionDBResponse {
    /// `"<modulo>.<nombre>"`
    pub fn qualified_name(&self) -> String {
        permission_string(&self.modulo, &self.nombre)
    }
}
