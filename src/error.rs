//! Error types for holocron
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for holocron
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Resource Errors
    // ============================================================================
    /// The requested resource kind is not in the supported set
    #[error("Unsupported resource kind: {kind}")]
    UnsupportedResource {
        /// The kind string that failed to parse
        kind: String,
    },

    /// A JSON payload was malformed or did not fit its typed model
    #[error("Failed to decode payload: {message}")]
    Decode {
        /// What the decoder rejected
        message: String,
    },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// A list page fetch came back with a non-success status
    #[error("HTTP {status} fetching page {url}")]
    PageFetch {
        /// HTTP status code of the failed fetch
        status: u16,
        /// URL of the page that failed
        url: String,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A single-resource request came back with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body as text
        body: String,
    },

    /// The target URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Create an unsupported-resource error
    pub fn unsupported_resource(kind: impl Into<String>) -> Self {
        Self::UnsupportedResource { kind: kind.into() }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a page-fetch error
    pub fn page_fetch(status: u16, url: impl Into<String>) -> Self {
        Self::PageFetch {
            status,
            url: url.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error is a broken page fetch, as opposed to normal
    /// exhaustion of a query set
    pub fn is_page_fetch(&self) -> bool {
        matches!(self, Error::PageFetch { .. })
    }

    /// Check if this error is retryable at the transport level
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for holocron
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported_resource("starships");
        assert_eq!(err.to_string(), "Unsupported resource kind: starships");

        let err = Error::decode("missing field `name`");
        assert_eq!(
            err.to_string(),
            "Failed to decode payload: missing field `name`"
        );

        let err = Error::page_fetch(502, "https://swapi.dev/api/people/?page=3");
        assert_eq!(
            err.to_string(),
            "HTTP 502 fetching page https://swapi.dev/api/people/?page=3"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_is_page_fetch() {
        assert!(Error::page_fetch(500, "http://x/page=2").is_page_fetch());
        assert!(!Error::http_status(500, "").is_page_fetch());
        assert!(!Error::decode("bad json").is_page_fetch());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(500, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::unsupported_resource("planets").is_retryable());
        assert!(!Error::page_fetch(500, "http://x").is_retryable());
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
