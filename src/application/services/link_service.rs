//! Link creation, resolution and removal service.

use std::sync::Arc;

use crate::domain::entities::{StoreTotals, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::validate_custom_code;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Result of a successful shorten operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
}

/// Service for creating, resolving and removing shortened links.
///
/// Validates input, delegates persistence to a [`UrlRepository`] and maps
/// store outcomes to [`AppError`] categories.
pub struct LinkService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` prefixes every short URL; a trailing slash is ignored.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Creates a short link for `long_url`.
    ///
    /// An empty `custom_code` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is not an absolute HTTP(S) URL
    /// - Custom code is invalid
    ///
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_code: Option<String>,
    ) -> Result<ShortenedLink, AppError> {
        let original_url = normalize_url(long_url).map_err(|e| {
            AppError::validation("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let custom_code = custom_code.filter(|code| !code.is_empty());
        if let Some(code) = &custom_code {
            validate_custom_code(code)?;
        }

        let code = self
            .repository
            .create(&original_url, custom_code)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to create short link"))?;

        let short_url = self.short_url(&code);
        tracing::info!(code = %code, original_url = %original_url, "Short link created");

        Ok(ShortenedLink {
            code,
            short_url,
            original_url,
        })
    }

    /// Resolves a code to its original URL and counts the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let Some(original_url) = self.repository.resolve(code).await? else {
            tracing::warn!(code, "Short code not found");
            return Err(not_found(code));
        };

        self.repository.increment_clicks(code).await?;
        tracing::info!(code, original_url = %original_url, "Redirecting");

        Ok(original_url)
    }

    /// Deletes the link stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if !self.repository.delete(code).await? {
            tracing::warn!(code, "Attempted to delete unknown short code");
            return Err(not_found(code));
        }

        tracing::info!(code, "Short link deleted");
        Ok(())
    }

    /// Returns the stored record for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .get_stats(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Returns link and click totals across the store.
    pub async fn totals(&self) -> Result<StoreTotals, AppError> {
        Ok(self.repository.totals().await?)
    }

    /// Checks that the store is reachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        Ok(self.repository.ping().await?)
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "code": code }))
}
