//! Error types for justInvest

use thiserror::Error;

/// Result type alias for justInvest
pub type Result<T> = std::result::Result<T, JustInvestError>;

/// Main error type for justInvest
#[derive(Error, Debug)]
pub enum JustInvestError {
    /// Configuration errors, including malformed catalogs
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Credential or role record storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}
