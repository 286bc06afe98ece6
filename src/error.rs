//! Error types for docklist
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Protocol errors (bad cursor, bad page size, continuation loop) are kept
//! separate from transport errors so the server can map the former to 400
//! responses and the walker can propagate the latter unchanged.

use thiserror::Error;

/// The main error type for docklist
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination protocol errors
    // ============================================================================
    #[error("last not found: {cursor}")]
    InvalidCursor { cursor: String },

    #[error("invalid page size: {value}")]
    InvalidPageSize { value: String },

    #[error("continuation loop detected, cursor repeated: {cursor}")]
    ProtocolLoop { cursor: String },

    #[error("malformed continuation link: {link}")]
    MalformedLink { link: String },

    #[error("walk cancelled")]
    WalkCancelled,

    // ============================================================================
    // Transport errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid cursor error
    pub fn invalid_cursor(cursor: impl Into<String>) -> Self {
        Self::InvalidCursor {
            cursor: cursor.into(),
        }
    }

    /// Create an invalid page size error
    pub fn invalid_page_size(value: impl Into<String>) -> Self {
        Self::InvalidPageSize {
            value: value.into(),
        }
    }

    /// Create a protocol loop error
    pub fn protocol_loop(cursor: impl Into<String>) -> Self {
        Self::ProtocolLoop {
            cursor: cursor.into(),
        }
    }

    /// Create a malformed link error
    pub fn malformed_link(link: impl Into<String>) -> Self {
        Self::MalformedLink { link: link.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error is retryable at the transport level.
    ///
    /// Protocol errors are never retryable: a bad cursor or a continuation
    /// loop will not heal on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for docklist
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_cursor("tag99");
        assert_eq!(err.to_string(), "last not found: tag99");

        let err = Error::invalid_page_size("abc");
        assert_eq!(err.to_string(), "invalid page size: abc");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::protocol_loop("tag5");
        assert_eq!(
            err.to_string(),
            "continuation loop detected, cursor repeated: tag5"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(500, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::invalid_cursor("x").is_retryable());
        assert!(!Error::protocol_loop("x").is_retryable());
        assert!(!Error::WalkCancelled.is_retryable());
    }
}
