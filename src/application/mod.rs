//! Application layer services implementing business logic.
//!
//! Services consume repository traits, validate input and translate store
//! results into [`crate::error::AppError`] categories for HTTP handlers.
//!
//! - [`services::link_service::LinkService`] - Shorten, resolve, delete and stats
pub mod services;
