//! Error-shape tests: every failure is a JSON `{message, code}` body.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get, get_auth, post_json, register_and_login};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Unknown routes answer with a JSON 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_route_is_json_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/starships").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["message"].is_string());
}

/// A non-numeric or out-of-range id is a 400, not a 404 or 500.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_id(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/planets/hoth").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let response = get(app.clone(), "/planets/99999999999999999999").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let token = register_and_login(app.clone(), "porkins@rebels.test").await;
    let response = get_auth(app, "/people/abc", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Malformed JSON is a validation error with a JSON body.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_json_body(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let request = Request::post("/planets")
        .header("content-type", "application/json")
        .body(Body::from("{ \"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// A body without a JSON content type is rejected the same way.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_content_type(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let request = Request::post("/register")
        .body(Body::from(r#"{"email":"a@b.test","password":"x"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

/// Wrong JSON types are validation errors too.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_wrong_field_type(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "C-3PO", "height": "tall", "mass": 75 });
    let response = post_json(app, "/people", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

/// Error responses still carry the request id header.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_error_response_has_request_id(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/people/31337").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("x-request-id"));
}
