use crate::declaration::{DeclarationSet, NetworkDeclaration};
use crate::error::{ConfigError, ConfigResult};
use crate::networks::NetworkKind;
use crate::provider::{EnvSource, ProcessEnv};
use std::str::FromStr;

/// Environment variable-based declaration overrides
///
/// Overrides land in the overrides layer of the network named by
/// `CHAINSMITH_NETWORK` (default: development), so the environment always
/// wins over both the defaults and the per-network declarations.
pub struct EnvLoader;

impl EnvLoader {
    /// Apply CHAINSMITH_* overrides from the process environment
    pub fn apply_overrides(declarations: &mut DeclarationSet) -> ConfigResult<()> {
        Self::apply_overrides_from(declarations, &ProcessEnv)
    }

    /// Apply CHAINSMITH_* overrides read through an injected lookup
    pub fn apply_overrides_from(
        declarations: &mut DeclarationSet,
        env: &dyn EnvSource,
    ) -> ConfigResult<()> {
        let target = Self::selected_network_from(env)?
            .unwrap_or_else(|| NetworkKind::Development.name().to_string());

        let mut over = NetworkDeclaration::default();

        if let Some(host) = env.var("CHAINSMITH_HOST") {
            over.host = Some(host);
        }
        over.port = Self::parse_var(env, "CHAINSMITH_PORT")?;
        over.chain_id = Self::parse_var(env, "CHAINSMITH_CHAIN_ID")?;
        over.gas_limit = Self::parse_var(env, "CHAINSMITH_GAS_LIMIT")?;
        over.gas_price = Self::parse_var(env, "CHAINSMITH_GAS_PRICE")?;
        if let Some(from) = env.var("CHAINSMITH_FROM") {
            over.from = Some(from);
        }
        if let Some(provider) = env.var("CHAINSMITH_PROVIDER") {
            over.provider = Some(provider);
        }

        if !over.is_empty() {
            declarations.push_override(&target, over);
        }

        Ok(())
    }

    /// Environment selected via CHAINSMITH_NETWORK, if any
    pub fn selected_network() -> ConfigResult<Option<String>> {
        Self::selected_network_from(&ProcessEnv)
    }

    /// Environment selected via CHAINSMITH_NETWORK, read through `env`
    pub fn selected_network_from(env: &dyn EnvSource) -> ConfigResult<Option<String>> {
        match env.var("CHAINSMITH_NETWORK") {
            Some(name) if name.is_empty() => Err(ConfigError::Environment(
                "CHAINSMITH_NETWORK cannot be empty".to_string(),
            )),
            Some(name) => Ok(Some(name)),
            None => Ok(None),
        }
    }

    /// Get a typed environment variable value
    pub fn get_env_var<T: FromStr>(key: &str) -> ConfigResult<Option<T>> {
        Self::parse_var(&ProcessEnv, key)
    }

    /// Get a required environment variable
    pub fn get_required_env_var<T: FromStr>(key: &str) -> ConfigResult<T> {
        Self::get_env_var(key)?.ok_or_else(|| {
            ConfigError::Environment(format!("Required environment variable {} not found", key))
        })
    }

    fn parse_var<T: FromStr>(env: &dyn EnvSource, key: &str) -> ConfigResult<Option<T>> {
        match env.var(key) {
            Some(value) => value.parse().map(Some).map_err(|_| {
                ConfigError::Environment(format!("Invalid value for {}: {}", key, value))
            }),
            None => Ok(None),
        }
    }
}
