//! Admin-only access extractor.
//!
//! There are no roles: the admin is the fixed identity
//! [`ADMIN_USER_ID`](holonet_core::access::ADMIN_USER_ID).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use holonet_core::access::is_admin;
use holonet_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// The caller, proven to be the admin.
///
/// No token is 401 (from [`AuthUser`]); any other user is 403.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_admin(user.user_id) {
            tracing::warn!(user_id = user.user_id, "Non-admin user denied admin route");
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin access required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
