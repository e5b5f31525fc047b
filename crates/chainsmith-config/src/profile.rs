use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// How an environment's endpoint is reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connection {
    /// Literal host and port declared by the operator
    Static { host: String, port: u16 },
    /// Endpoint supplied by a credential provider at resolution time
    Endpoint { url: String },
}

/// Signing identity for transactions submitted to an environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// Literal account address
    Address(String),
    /// Signing capability derived lazily by the named credential provider
    Derived { provider: String },
}

/// Fully-resolved deployment target
///
/// Profiles are constructed once by [`crate::ConfigResolver`] and never
/// mutated afterwards. The chain identifier of a given environment name is
/// stable for the lifetime of the process because declarations are immutable
/// after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Environment label, unique within the declaration set
    pub name: String,

    /// Endpoint to reach
    pub connection: Connection,

    /// Numeric identifier of the target chain
    pub chain_id: u64,

    /// Upper bound on gas per transaction
    pub gas_limit: u64,

    /// Price per gas unit in the smallest currency unit
    pub gas_price: u64,

    /// Transaction sender
    pub sender: Sender,
}

impl NetworkProfile {
    /// Validate a resolved profile
    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.is_empty() {
            return Err(ConfigError::InvalidProfile {
                environment: self.name.clone(),
                reason: "environment name cannot be empty".to_string(),
            });
        }

        if self.chain_id == 0 {
            return Err(ConfigError::InvalidProfile {
                environment: self.name.clone(),
                reason: "chain_id must be a positive integer".to_string(),
            });
        }

        if self.gas_limit == 0 {
            return Err(ConfigError::InvalidProfile {
                environment: self.name.clone(),
                reason: "gas_limit must be a positive integer".to_string(),
            });
        }

        match &self.connection {
            Connection::Static { host, port } => {
                if host.is_empty() {
                    return Err(ConfigError::InvalidProfile {
                        environment: self.name.clone(),
                        reason: "host cannot be empty".to_string(),
                    });
                }
                if *port == 0 {
                    return Err(ConfigError::InvalidProfile {
                        environment: self.name.clone(),
                        reason: "port must be in range 1-65535".to_string(),
                    });
                }
            }
            Connection::Endpoint { url } => {
                if url.is_empty() {
                    return Err(ConfigError::InvalidProfile {
                        environment: self.name.clone(),
                        reason: "provider endpoint URL cannot be empty".to_string(),
                    });
                }
            }
        }

        if let Sender::Address(address) = &self.sender {
            validate_address(&self.name, address)?;
        }

        Ok(())
    }
}

/// Check a literal sender address: 0x prefix plus 20 hex-encoded bytes
pub fn validate_address(environment: &str, address: &str) -> ConfigResult<()> {
    let stripped = address
        .strip_prefix("0x")
        .ok_or_else(|| ConfigError::InvalidProfile {
            environment: environment.to_string(),
            reason: format!("sender address must start with 0x: {}", address),
        })?;

    let bytes = hex::decode(stripped).map_err(|_| ConfigError::InvalidProfile {
        environment: environment.to_string(),
        reason: format!("sender address is not valid hex: {}", address),
    })?;

    if bytes.len() != 20 {
        return Err(ConfigError::InvalidProfile {
            environment: environment.to_string(),
            reason: format!(
                "sender address must encode 20 bytes, got {}: {}",
                bytes.len(),
                address
            ),
        });
    }

    Ok(())
}
