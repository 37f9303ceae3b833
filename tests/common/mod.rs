#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tinylink::application::services::LinkService;
use tinylink::infrastructure::persistence::{self, SqliteUrlRepository};
use tinylink::routes::app_router;
use tinylink::state::AppState;

pub const BASE_URL: &str = "http://localhost:8000";
pub const CODE_LENGTH: usize = 6;

/// Opens a fresh, migrated in-memory database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = persistence::connect("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .unwrap();
    persistence::migrate(&pool).await.unwrap();
    pool
}

pub fn create_test_repository(pool: SqlitePool) -> SqliteUrlRepository {
    SqliteUrlRepository::new(Arc::new(pool), CODE_LENGTH)
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(create_test_repository(pool));
    AppState::new(Arc::new(LinkService::new(repository, BASE_URL)))
}

pub async fn create_test_server() -> (TestServer, SqlitePool) {
    let pool = create_test_pool().await;
    let app = app_router(create_test_state(pool.clone()));
    (TestServer::new(app).unwrap(), pool)
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, original_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn clicks_for(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Extracts the code from a `short_url` returned by `POST /shorten`.
pub fn code_from_short_url(short_url: &str) -> String {
    short_url.rsplit('/').next().unwrap().to_string()
}
