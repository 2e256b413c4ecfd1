//! Handlers for registration and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_db::models::user::CreateUser;
use holonet_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::MessageResponse;
use crate::state::AppState;

const EMAIL_TAKEN: &str = "Email already registered";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register` and `POST /login`.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a validation error rather than a parse error.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Borrow the validated fields.
    fn fields(&self) -> AppResult<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(AppError::Core(CoreError::Validation(
                "Email and password are required".into(),
            ))),
        }
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create an active user with a hashed password. Does not log the user in.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (email, password) = input.fields()?;

    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(EMAIL_TAKEN.into())));
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        email: email.to_string(),
        password_hash,
    };

    let user = UserRepo::create(&state.pool, &create_dto)
        .await
        .map_err(|e| {
            if holonet_db::is_unique_violation(&e) {
                AppError::Core(CoreError::Conflict(EMAIL_TAKEN.into()))
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

/// POST /login
///
/// Verify email + password and issue a bearer access token.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CredentialsRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (email, password) = input.fields()?;

    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let access_token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        access_token,
        expires_in: state.config.jwt.expires_in_secs(),
    }))
}
