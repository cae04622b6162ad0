mod common;

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;

#[tokio::test]
async fn test_redirect_to_stored_url() {
    let server = TestServer::new(common::api_router(common::create_memory_state())).unwrap();

    let short_id = server
        .post("/api/shorturl/new")
        .form(&[("url", "https://www.example.com/docs/")])
        .await
        .json::<Value>()["short_url"]
        .as_i64()
        .unwrap();

    let response = server.get(&format!("/api/shorturl/{short_id}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        "https://www.example.com/docs/"
    );
}

#[tokio::test]
async fn test_redirect_unknown_id_is_not_found() {
    let server = TestServer::new(common::api_router(common::create_memory_state())).unwrap();

    let response = server.get("/api/shorturl/999999").await;

    response.assert_status_not_found();
    response.assert_text("short url not found");
}

#[tokio::test]
async fn test_redirect_malformed_id_is_not_found() {
    let server = TestServer::new(common::api_router(common::create_memory_state())).unwrap();

    for path in ["/api/shorturl/abc", "/api/shorturl/0", "/api/shorturl/-1"] {
        let response = server.get(path).await;
        response.assert_status_not_found();
        response.assert_text("short url not found");
    }
}

#[sqlx::test]
async fn test_redirect_postgres_record(pool: PgPool) {
    let short_id = common::insert_url(&pool, "https://example.org/landing").await;
    let server = TestServer::new(common::api_router(common::create_pg_state(pool))).unwrap();

    let response = server.get(&format!("/api/shorturl/{short_id}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        "https://example.org/landing"
    );
}
