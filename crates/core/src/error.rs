//! Domain error taxonomy.
//!
//! The `Display` text of every variant except [`CoreError::Internal`] is safe
//! to show to API clients as-is.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced user, catalog entry, or favorite does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// A unique value (email, favorite pair) is already taken.
    #[error("{0}")]
    Conflict(String),

    /// Missing or bad credentials or token.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed.
    #[error("{0}")]
    Forbidden(String),

    /// Broken invariant. The message is logged, never returned.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound { .. } => "NOT_FOUND",
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::Conflict(_) => "CONFLICT",
            CoreError::Unauthorized(_) => "UNAUTHORIZED",
            CoreError::Forbidden(_) => "FORBIDDEN",
            CoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
