//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use padoca_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// The password hash never leaves the server; it is excluded from
/// serialization entirely.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "perfil")]
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The password arrives pre-hashed; hashing
/// is the API layer's responsibility.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
