//! Tests for `/health`, the `/` endpoint map, and shared middleware.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use holonet_api::routes::endpoints;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// The health endpoint reports a reachable database.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_ok(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

/// A closed pool is reported as degraded rather than failing the request.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_degraded_when_pool_closed(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

/// `/` lists every endpoint with method, path, and access level.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_endpoint_map(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), endpoints().len());
    assert!(entries.iter().any(|e| {
        e["method"] == "GET" && e["path"] == "/users" && e["access"] == "admin"
    }));
    assert!(entries.iter().any(|e| {
        e["method"] == "POST" && e["path"] == "/favorite/planet/{id}" && e["access"] == "user"
    }));
}

/// Every advertised endpoint is actually routed: none falls through to the
/// JSON 404 fallback or answers 405.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_every_advertised_endpoint_is_routed(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    for endpoint in endpoints() {
        let uri = endpoint.path.replace("{id}", "1");
        let method = Method::from_bytes(endpoint.method.as_bytes()).unwrap();
        let request = Request::builder()
            .method(method)
            .uri(&uri)
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        assert_ne!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {uri}", endpoint.method);
        if status == StatusCode::NOT_FOUND {
            let json = body_json(response).await;
            assert_ne!(json["message"], "Route not found", "{} {uri}", endpoint.method);
        }
    }
}

/// A request id is generated and echoed on every response.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_id_header(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/health").await;
    let generated = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id should be set");
    assert!(!generated.is_empty());

    let request = Request::get("/health")
        .header("x-request-id", "trace-me-1138")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me-1138");
}

/// CORS preflight from the configured origin is allowed.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_cors_preflight(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/planets")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}
