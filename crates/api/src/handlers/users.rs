//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;
use holonet_db::models::user::UserResponse;
use holonet_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// GET /users
///
/// Every registered user. Admin only.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
