//! Core domain entities.
//!
//! Entities are plain data structures without business logic.
//!
//! - [`UrlRecord`] - A short code mapped to its original URL and click counter
//! - [`StoreTotals`] - Aggregate counters over all records

pub mod url_record;

pub use url_record::{StoreTotals, UrlRecord};
