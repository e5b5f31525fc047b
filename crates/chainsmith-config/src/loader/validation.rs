use crate::declaration::DeclarationSet;
use crate::error::{ConfigError, ConfigResult};
use std::collections::HashMap;

/// Declaration-set validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a declaration set before it is handed to a resolver
    pub fn validate_set(declarations: &DeclarationSet) -> ConfigResult<()> {
        Self::validate_structure(declarations)?;
        Self::validate_chain_ids(declarations)?;
        Self::validate_known_networks(declarations)?;
        Ok(())
    }

    pub fn validate(&self, declarations: &DeclarationSet) -> ConfigResult<()> {
        Self::validate_set(declarations)
    }

    /// Structural checks on every effective declaration
    ///
    /// A declaration may still be incomplete here (a missing sender can be
    /// supplied at resolution time), but a declared field must be usable.
    fn validate_structure(declarations: &DeclarationSet) -> ConfigResult<()> {
        for name in declarations.names() {
            let effective = match declarations.effective(&name) {
                Some(effective) => effective,
                None => continue,
            };

            if effective.provider.is_some() {
                if effective.host.is_some() || effective.port.is_some() {
                    return Err(ConfigError::InvalidProfile {
                        environment: name.clone(),
                        reason: "declares both a static endpoint and a credential provider"
                            .to_string(),
                    });
                }
                if effective.from.is_some() {
                    return Err(ConfigError::InvalidProfile {
                        environment: name.clone(),
                        reason: "declares both a sender address and a credential provider"
                            .to_string(),
                    });
                }
            }

            if effective.chain_id == Some(0) {
                return Err(ConfigError::InvalidProfile {
                    environment: name.clone(),
                    reason: "chain_id must be a positive integer".to_string(),
                });
            }

            if effective.gas_limit == Some(0) {
                return Err(ConfigError::InvalidProfile {
                    environment: name.clone(),
                    reason: "gas_limit must be a positive integer".to_string(),
                });
            }

            if effective.port == Some(0) {
                return Err(ConfigError::InvalidProfile {
                    environment: name,
                    reason: "port must be in range 1-65535".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Two environments pointing at the same chain is almost always a
    /// copy-paste mistake
    fn validate_chain_ids(declarations: &DeclarationSet) -> ConfigResult<()> {
        let mut seen: HashMap<u64, String> = HashMap::new();

        for name in declarations.names() {
            if let Some(chain_id) = declarations.effective(&name).and_then(|d| d.chain_id) {
                if let Some(previous) = seen.insert(chain_id, name.clone()) {
                    return Err(ConfigError::Validation(format!(
                        "Environments '{}' and '{}' both declare chain id {}",
                        previous, name, chain_id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Known public networks must keep their canonical chain ids, and a
    /// development entry must stay on a loopback host
    fn validate_known_networks(declarations: &DeclarationSet) -> ConfigResult<()> {
        let canonical: [(&str, u64); 2] = [("ropsten", 3), ("rinkeby", 4)];

        for (name, expected) in canonical {
            if let Some(chain_id) = declarations.effective(name).and_then(|d| d.chain_id) {
                if chain_id != expected {
                    return Err(ConfigError::Validation(format!(
                        "Environment '{}' must declare chain id {}, found {}",
                        name, expected, chain_id
                    )));
                }
            }
        }

        if let Some(host) = declarations.effective("development").and_then(|d| d.host) {
            if host != "127.0.0.1" && host != "localhost" && host != "::1" {
                return Err(ConfigError::Validation(format!(
                    "Environment 'development' must point at a loopback host, found {}",
                    host
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
