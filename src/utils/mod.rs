//! Helper functions used across the application.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_normalizer`] - Target URL validation and normalization
//! - [`db_error`] - Classification of storage errors

pub mod code_generator;
pub mod db_error;
pub mod url_normalizer;
