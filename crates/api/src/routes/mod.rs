pub mod auth;
pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod users;

use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::handlers;
use crate::state::AppState;

/// Who may call an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Public,
    /// Any valid bearer token.
    User,
    /// Bearer token for the admin identity.
    Admin,
}

/// One entry in the endpoint map served at `GET /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub access: Access,
}

const fn endpoint(method: &'static str, path: &'static str, access: Access) -> Endpoint {
    Endpoint {
        method,
        path,
        access,
    }
}

const ROOT_ENDPOINTS: &[Endpoint] = &[endpoint("GET", "/", Access::Public)];

/// Every mounted endpoint, collected from the per-resource route modules.
pub fn endpoints() -> Vec<Endpoint> {
    [
        ROOT_ENDPOINTS,
        health::ENDPOINTS,
        auth::ENDPOINTS,
        people::ENDPOINTS,
        planets::ENDPOINTS,
        users::ENDPOINTS,
        favorites::ENDPOINTS,
    ]
    .concat()
}

/// Build the application route tree.
///
/// ```text
/// /                                endpoint map (public)
///
/// /register                        register (public)
/// /login                           login (public)
///
/// /people                          list, create (public)
/// /people/{id}                     get (public)
/// /planets                         list, create (public)
/// /planets/{id}                    get (public)
///
/// /users                           list (admin only)
/// /users/favorites                 caller's favorites (auth required)
///
/// /favorite/planet/{id}            add, remove (auth required)
/// /favorite/people/{id}            add, remove (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::sitemap::sitemap))
        .merge(auth::router())
        .merge(people::router())
        .merge(planets::router())
        .merge(users::router())
        .merge(favorites::router())
}
