//! Route definitions for the `/people` resource.

use axum::routing::get;
use axum::Router;

use super::{endpoint, Access, Endpoint};
use crate::handlers::people;
use crate::state::AppState;

pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/people", Access::Public),
    endpoint("POST", "/people", Access::Public),
    endpoint("GET", "/people/{id}", Access::Public),
];

/// ```text
/// GET, POST  /people       -> list, create
/// GET        /people/{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(people::list).post(people::create))
        .route("/people/{id}", get(people::get_by_id))
}
