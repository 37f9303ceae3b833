//! URL record entity representing a stored short link.

use chrono::{DateTime, Utc};

/// A stored mapping from a short code to its original URL.
///
/// `original_url` never changes after creation; `clicks` only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            clicks,
        }
    }
}

/// Aggregate counters across every stored record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreTotals {
    pub links: i64,
    pub clicks: i64,
}
