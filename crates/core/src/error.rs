use crate::types::DbId;

/// Domain-level error taxonomy shared by every crate in the workspace.
///
/// The HTTP layer maps each variant onto a status code and a client-safe
/// message; `Internal` detail is only ever logged, never sent to clients.
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
