//! SQLite persistence.
//!
//! - [`database`] - Pool construction and embedded migrations
//! - [`SqliteUrlRepository`] - Short link storage and retrieval

pub mod database;
pub mod sqlite_url_repository;

pub use database::{MIGRATOR, connect, migrate};
pub use sqlite_url_repository::SqliteUrlRepository;
