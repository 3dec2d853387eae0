//! Common error types for Cardmint components.

use thiserror::Error;

/// Common errors across Cardmint components
#[derive(Debug, Error)]
pub enum CardmintError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Masked pattern rejected (non-digit, non-wildcard content)
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Invalid input/request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lookup client error
    #[error("Lookup error: {0}")]
    Lookup(String),
}

impl CardmintError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Config(_) => 500,
            Self::InvalidPattern(_) => 400,
            Self::InvalidInput(_) => 400,
            Self::Lookup(_) => 502,
        }
    }
}
