//! Health endpoint integration tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

/// GET /health returns 200 with the envelope and a healthy database flag.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_ok(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["db_healthy"], true);
    assert!(json["data"]["version"].is_string());
}

/// Unknown routes fall through to axum's 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_route(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/nonsense").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
