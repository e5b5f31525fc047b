use thiserror::Error;

/// Core error types used across all chainsmith crates
#[derive(Error, Debug, Clone)]
pub enum ChainsmithError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential resolution errors
    #[error("Credential error: {0}")]
    Credential(String),

    /// Serialization/Deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input or state
    #[error("Invalid: {0}")]
    Invalid(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Standard Result type used across chainsmith
pub type ChainsmithResult<T> = Result<T, ChainsmithError>;
