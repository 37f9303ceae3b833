//! # tinylink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record entity and the storage contract
//! - **Application Layer** ([`application`]) - Input validation and error mapping
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Random 6-character codes from a 62-symbol alphabet, or caller-chosen codes
//! - Code uniqueness enforced by the database constraint, not a prior lookup
//! - Click counting on every redirect
//! - Deletion and per-link statistics
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shortener.db"
//! export BASE_URL="http://localhost:8000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ShortenedLink};
    pub use crate::domain::entities::{StoreTotals, UrlRecord};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::{AppError, StoreError};
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
