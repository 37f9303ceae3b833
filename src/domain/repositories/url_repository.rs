//! Repository trait for short link storage.

use crate::domain::entities::{StoreTotals, UrlRecord};
use crate::error::StoreError;
use async_trait::async_trait;

/// Storage interface for short code to URL records.
///
/// Every method maps to a single self-contained statement against the
/// backing store, so concurrent callers never observe a partial update.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores `original_url` under a new short code and returns the code.
    ///
    /// With `custom_code` the code is inserted as given. Without it, random
    /// codes are generated until one is accepted by the uniqueness constraint.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the custom code is taken.
    /// Returns [`StoreError::Database`] on storage failures.
    async fn create(
        &self,
        original_url: &str,
        custom_code: Option<String>,
    ) -> Result<String, StoreError>;

    /// Looks up the original URL for a code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if not found
    async fn resolve(&self, code: &str) -> Result<Option<String>, StoreError>;

    /// Atomically adds one click to the record. Unknown codes are ignored.
    async fn increment_clicks(&self, code: &str) -> Result<(), StoreError>;

    /// Removes the record. Returns `Ok(true)` if a record was removed.
    async fn delete(&self, code: &str) -> Result<bool, StoreError>;

    /// Returns the full record for a code, if any.
    async fn get_stats(&self, code: &str) -> Result<Option<UrlRecord>, StoreError>;

    /// Counts stored links and the clicks across all of them.
    async fn totals(&self) -> Result<StoreTotals, StoreError>;

    /// Round-trips to the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}
