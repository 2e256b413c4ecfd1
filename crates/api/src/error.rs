use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use holonet_core::error::CoreError;
use serde::Serialize;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Error type returned by every handler and extractor.
///
/// Domain failures arrive as [`CoreError`]; the remaining variants cover the
/// store and HTTP-level problems. Every variant renders as
/// `{"message": ..., "code": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unparseable request line or path, as opposed to a bad body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Failure in a library call (hashing, signing). Logged, not returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    code: &'static str,
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Core(core) => core_error_parts(core),
            AppError::Database(err) => sqlx_error_parts(err),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: msg.clone(),
                    code: "BAD_REQUEST",
                },
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, ErrorBody) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody {
            message: INTERNAL_MESSAGE.to_string(),
            code: "INTERNAL_ERROR",
        },
    )
}

fn core_error_parts(err: &CoreError) -> (StatusCode, ErrorBody) {
    let status = match err {
        CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        // Duplicates are reported as a plain 400, like other bad input.
        CoreError::Validation(_) | CoreError::Conflict(_) => StatusCode::BAD_REQUEST,
        CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            return internal();
        }
    };
    (
        status,
        ErrorBody {
            message: err.to_string(),
            code: err.code(),
        },
    )
}

/// Map a store error onto the same taxonomy.
///
/// - `RowNotFound` is 404.
/// - Unique index violations are 400 `CONFLICT`.
/// - Foreign key violations are 404 (the referenced row is gone).
/// - Everything else is a sanitized 500.
fn sqlx_error_parts(err: &sqlx::Error) -> (StatusCode, ErrorBody) {
    let (status, code, message) = match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found"),
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => (
            StatusCode::BAD_REQUEST,
            "CONFLICT",
            "Duplicate value violates a unique constraint",
        ),
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Referenced resource not found",
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            return internal();
        }
    };
    (
        status,
        ErrorBody {
            message: message.to_string(),
            code,
        },
    )
}
