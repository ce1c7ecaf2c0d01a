//! Relay Error Types

use catalog_core::CatalogError;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, RelayError>;

/// Email relay errors
#[derive(Error, Debug)]
pub enum RelayError {
    /// Transport failure before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The email service answered with a non-success status
    #[error("Email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Missing or invalid relay settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Test double told to fail
    #[error("Simulated failure: {0}")]
    Simulated(String),
}

impl RelayError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(err) => err.is_timeout() || err.is_connect(),
            Self::Rejected { status, .. } => *status == 429 || *status >= 500,
            Self::Simulated(_) => true,
            Self::Config(_) => false,
        }
    }
}

impl From<RelayError> for CatalogError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Config(msg) => Self::Config(msg),
            err if err.is_retryable() => Self::RelayUnavailable(err.to_string()),
            err => Self::Relay(err.to_string()),
        }
    }
}
