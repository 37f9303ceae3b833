//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Symbols a generated short code is drawn from: `A-Z`, `a-z`, `0-9`.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest custom code accepted from callers.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 32;

/// Static path segments of the HTTP API. A short code equal to one of these
/// would be shadowed by the static route and could never be redirected to.
pub const RESERVED_CODES: &[&str] = &["shorten", "stats"];

/// Returns `true` if `code` collides with a static route segment.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Generates a random short code of `length` symbols from [`CODE_ALPHABET`].
///
/// The code is not checked against existing records; uniqueness is decided
/// by the store when the code is inserted.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Validates a caller-supplied custom short code.
///
/// # Rules
///
/// - Length: 1-32 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Not one of [`RESERVED_CODES`]
///
/// Anything else could not be addressed as a single path segment.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::validation(
            format!("Custom code must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::validation(
            "Custom code can only contain letters, digits, hyphens and underscores",
            json!({ "code": code }),
        ));
    }

    if is_reserved_code(code) {
        return Err(AppError::validation(
            "Custom code is reserved",
            json!({ "code": code, "reserved": RESERVED_CODES }),
        ));
    }

    Ok(())
}
