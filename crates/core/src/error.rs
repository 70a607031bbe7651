use crate::types::DbId;

/// Domain error taxonomy shared by every layer above this crate.
///
/// The HTTP layer maps these onto status codes (400/401/403/404/409/500);
/// storage failures surface separately as `sqlx::Error` and are classified
/// at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
