//! Route definitions for the `/planets` resource.

use axum::routing::get;
use axum::Router;

use super::{endpoint, Access, Endpoint};
use crate::handlers::planets;
use crate::state::AppState;

pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/planets", Access::Public),
    endpoint("POST", "/planets", Access::Public),
    endpoint("GET", "/planets/{id}", Access::Public),
];

/// ```text
/// GET, POST  /planets       -> list, create
/// GET        /planets/{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(planets::list).post(planets::create))
        .route("/planets/{id}", get(planets::get_by_id))
}
