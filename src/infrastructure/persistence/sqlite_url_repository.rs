//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{StoreTotals, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;
use crate::utils::code_generator::{generate_code, is_reserved_code};
use crate::utils::db_error::is_unique_violation_on_code;

/// SQLite repository for short link storage.
///
/// Code uniqueness is enforced by the `UNIQUE` constraint on
/// `urls.short_code`: a generated code is accepted exactly when its insert
/// succeeds, so two concurrent callers can never be handed the same code.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
    code_length: usize,
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    clicks: i64,
}

impl From<UrlRow> for UrlRecord {
    fn from(r: UrlRow) -> Self {
        UrlRecord::new(r.id, r.short_code, r.original_url, r.created_at, r.clicks)
    }
}

impl SqliteUrlRepository {
    /// Creates a new repository generating codes of `code_length` symbols.
    pub fn new(pool: Arc<SqlitePool>, code_length: usize) -> Self {
        Self { pool, code_length }
    }

    /// Samples a candidate short code of the configured length.
    pub fn generate_code(&self) -> String {
        generate_code(self.code_length)
    }

    async fn insert(&self, code: &str, original_url: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO urls (short_code, original_url, created_at, clicks) VALUES (?1, ?2, ?3, 0)",
        )
        .bind(code)
        .bind(original_url)
        .bind(Utc::now())
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn create(
        &self,
        original_url: &str,
        custom_code: Option<String>,
    ) -> Result<String, StoreError> {
        if let Some(code) = custom_code {
            return match self.insert(&code, original_url).await {
                Ok(()) => Ok(code),
                Err(e) if is_unique_violation_on_code(&e) => Err(StoreError::DuplicateCode(code)),
                Err(e) => Err(e.into()),
            };
        }

        loop {
            let code = self.generate_code();
            if is_reserved_code(&code) {
                continue;
            }

            match self.insert(&code, original_url).await {
                Ok(()) => return Ok(code),
                Err(e) if is_unique_violation_on_code(&e) => {
                    tracing::debug!(code = %code, "Generated short code collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn resolve(&self, code: &str) -> Result<Option<String>, StoreError> {
        let url: Option<String> =
            sqlx::query_scalar("SELECT original_url FROM urls WHERE short_code = ?1")
                .bind(code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(url)
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), StoreError> {
        sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE short_code = ?1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM urls WHERE short_code = ?1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_stats(&self, code: &str) -> Result<Option<UrlRecord>, StoreError> {
        let row: Option<UrlRow> = sqlx::query_as(
            "SELECT id, short_code, original_url, created_at, clicks FROM urls WHERE short_code = ?1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn totals(&self) -> Result<StoreTotals, StoreError> {
        let (links, clicks): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(clicks), 0) FROM urls")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(StoreTotals { links, clicks })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
