//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom short code; a random one is generated when absent.
    pub custom_code: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
}
