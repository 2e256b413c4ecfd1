//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use super::{endpoint, Access, Endpoint};
use crate::handlers::{favorites, users};
use crate::state::AppState;

pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/users", Access::Admin),
    endpoint("GET", "/users/favorites", Access::User),
];

/// ```text
/// GET /users            -> list (admin only)
/// GET /users/favorites  -> list_mine (auth required)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list))
        .route("/users/favorites", get(favorites::list_mine))
}
