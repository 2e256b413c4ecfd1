//! The endpoint map served at `/` and the JSON fallback for unknown routes.

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::routes::{endpoints, Endpoint};

/// GET /
pub async fn sitemap() -> Json<Vec<Endpoint>> {
    Json(endpoints())
}

/// Fallback for paths no route matches.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found", "code": "NOT_FOUND" })),
    )
}
