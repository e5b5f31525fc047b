use chainsmith_utils::ChainsmithError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown environment: {name}")]
    UnknownEnvironment { name: String },

    #[error("Missing credential for '{environment}': {variable} is not set")]
    MissingCredential {
        environment: String,
        variable: String,
    },

    #[error("Invalid profile for '{environment}': {reason}")]
    InvalidProfile { environment: String, reason: String },

    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    #[error("Chainsmith error: {0}")]
    Core(#[from] ChainsmithError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ConfigError> for ChainsmithError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingCredential { .. } => ChainsmithError::Credential(err.to_string()),
            ConfigError::UnknownEnvironment { .. } => ChainsmithError::NotFound(err.to_string()),
            _ => ChainsmithError::Config(err.to_string()),
        }
    }
}
