//! Grid data error types

use thiserror::Error;

/// Errors that can occur while fetching grid data
#[derive(Debug, Error)]
pub enum GridError {
    /// Connection to the Fingrid service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the Fingrid service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the Fingrid service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl GridError {
    /// Returns true if this error is retryable
    ///
    /// No retry is attempted by this crate; the flag is a hint for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}
