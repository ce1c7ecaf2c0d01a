//! Error Types

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No entry with this identifier
    #[error("Unknown entry: {0}")]
    UnknownEntry(String),

    /// Category slug or label not recognised
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Form failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] crate::lead::ValidationError),

    /// Outbound relay rejected or failed the send
    #[error("Relay error: {0}")]
    Relay(String),

    /// Relay not reachable (network, timeout)
    #[error("Relay unavailable: {0}")]
    RelayUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownEntry(id) => format!("We couldn't find an agent called '{id}'."),
            Self::UnknownCategory(name) => format!("'{name}' is not a catalog category."),
            Self::Validation(err) => err.to_string(),
            Self::Relay(_) | Self::RelayUnavailable(_) => {
                "Your message could not be sent. Please try again.".into()
            }
            _ => "An unexpected error occurred.".into(),
        }
    }
}
