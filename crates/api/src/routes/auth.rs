//! Route definitions for registration and login.

use axum::routing::post;
use axum::Router;

use super::{endpoint, Access, Endpoint};
use crate::handlers::auth;
use crate::state::AppState;

pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("POST", "/register", Access::Public),
    endpoint("POST", "/login", Access::Public),
];

/// ```text
/// POST /register  -> register
/// POST /login     -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}
