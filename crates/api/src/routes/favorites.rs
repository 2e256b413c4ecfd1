//! Route definitions for the `/favorite` resource.

use axum::routing::post;
use axum::Router;

use super::{endpoint, Access, Endpoint};
use crate::handlers::favorites;
use crate::state::AppState;

pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("POST", "/favorite/planet/{id}", Access::User),
    endpoint("DELETE", "/favorite/planet/{id}", Access::User),
    endpoint("POST", "/favorite/people/{id}", Access::User),
    endpoint("DELETE", "/favorite/people/{id}", Access::User),
];

/// ```text
/// POST, DELETE /favorite/planet/{id}  -> add_planet, remove_planet
/// POST, DELETE /favorite/people/{id}  -> add_person, remove_person
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/favorite/planet/{id}",
            post(favorites::add_planet).delete(favorites::remove_planet),
        )
        .route(
            "/favorite/people/{id}",
            post(favorites::add_person).delete(favorites::remove_person),
        )
}
