//! Target URL validation and normalization.

use url::Url;

/// Errors that can occur while accepting a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Parses an absolute HTTP(S) URL and returns its canonical serialization.
///
/// Only syntax is checked: the URL must parse, use `http` or `https`, and
/// carry a host. The returned string is the `url` crate's serialization,
/// so a bare origin gains a trailing slash and the host is lowercased.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("https://example.com").unwrap(), "https://example.com/");
/// assert!(normalize_url("not-a-valid-url").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let url =
        Url::parse(input.trim()).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_origin_gets_trailing_slash() {
        assert_eq!(
            normalize_url("https://example.com").unwrap(),
            "https://example.com/"
        );
        assert_eq!(
            normalize_url("http://example.com").unwrap(),
            "http://example.com/"
        );
    }

    #[test]
    fn test_normalize_lowercases_host() {
        assert_eq!(
            normalize_url("https://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_normalize_preserves_query_and_fragment() {
        assert_eq!(
            normalize_url("https://example.com/search?q=rust#top").unwrap(),
            "https://example.com/search?q=rust#top"
        );
    }

    #[test]
    fn test_normalize_keeps_port() {
        assert_eq!(
            normalize_url("http://localhost:3000/test").unwrap(),
            "http://localhost:3000/test"
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_url("  https://example.com/a  ").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_normalize_invalid_url() {
        assert!(matches!(
            normalize_url("not-a-valid-url").unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
        assert!(matches!(
            normalize_url("").unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
        assert!(matches!(
            normalize_url("example.com").unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_normalize_rejects_other_protocols() {
        for input in [
            "ftp://example.com/file.txt",
            "javascript:alert('xss')",
            "mailto:test@example.com",
            "file:///etc/passwd",
        ] {
            assert!(matches!(
                normalize_url(input).unwrap_err(),
                UrlNormalizationError::UnsupportedProtocol
            ));
        }
    }
}
