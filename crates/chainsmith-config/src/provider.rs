use crate::error::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::fmt;

/// Process-environment lookup, injected so resolution can be tested without
/// touching global state
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment
#[derive(Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Map-backed lookup for tests and embedders
#[derive(Debug, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Secret phrase held opaquely; never printed or serialized
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic(String);

impl Mnemonic {
    pub fn new(phrase: String) -> Self {
        Self(phrase)
    }

    /// Hand the phrase to the signing collaborator
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mnemonic(<redacted>)")
    }
}

/// Connectivity and signing material yielded by a credential provider
#[derive(Debug, Clone)]
pub struct Credential {
    /// Endpoint the signing collaborator should connect to
    pub endpoint_url: String,

    /// Secret phrase backing the derived signer
    pub mnemonic: Mnemonic,
}

/// Deferred source of connectivity and signing capability
///
/// Providers are referenced from declarations by id; the declaration data
/// itself never carries executable behavior. A provider reads any secret it
/// needs through the injected [`EnvSource`] and must not reach into ambient
/// process state on its own.
pub trait CredentialProvider: Send + Sync {
    /// Provider id referenced from network declarations
    fn id(&self) -> &str;

    /// Produce the credential for `environment`
    fn provide(&self, environment: &str, env: &dyn EnvSource) -> ConfigResult<Credential>;
}

/// Wallet provider backed by a mnemonic phrase from the environment
///
/// Mirrors the classic hosted-gateway setup: a fixed endpoint URL plus a
/// secret phrase that is only safe to supply through an environment
/// variable, never a declaration file.
pub struct HdWalletProvider {
    id: String,
    endpoint_url: String,
    mnemonic_var: String,
}

impl HdWalletProvider {
    pub fn new(id: &str, endpoint_url: &str, mnemonic_var: &str) -> Self {
        Self {
            id: id.to_string(),
            endpoint_url: endpoint_url.to_string(),
            mnemonic_var: mnemonic_var.to_string(),
        }
    }

    /// Environment variable the mnemonic is read from
    pub fn mnemonic_var(&self) -> &str {
        &self.mnemonic_var
    }
}

impl CredentialProvider for HdWalletProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn provide(&self, environment: &str, env: &dyn EnvSource) -> ConfigResult<Credential> {
        let phrase = env
            .var(&self.mnemonic_var)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingCredential {
                environment: environment.to_string(),
                variable: self.mnemonic_var.clone(),
            })?;

        Ok(Credential {
            endpoint_url: self.endpoint_url.clone(),
            mnemonic: Mnemonic::new(phrase),
        })
    }
}

/// Named credential providers available to the resolver
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Box<dyn CredentialProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own id, replacing any previous entry
    pub fn register(&mut self, provider: Box<dyn CredentialProvider>) {
        self.providers.insert(provider.id().to_string(), provider);
    }

    pub fn get(&self, id: &str) -> Option<&dyn CredentialProvider> {
        self.providers.get(id).map(|p| p.as_ref())
    }

    pub fn ids(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hdwallet_provider_reads_injected_env() {
        let provider = HdWalletProvider::new("hdwallet", "https://gateway.example/key", "HDMNEMONIC");
        let env = StaticEnv::new().with("HDMNEMONIC", "legal winner thank year wave");

        let credential = provider.provide("rinkeby", &env).unwrap();
        assert_eq!(credential.endpoint_url, "https://gateway.example/key");
        assert_eq!(credential.mnemonic.reveal(), "legal winner thank year wave");
    }

    #[test]
    fn test_hdwallet_provider_missing_secret() {
        let provider = HdWalletProvider::new("hdwallet", "https://gateway.example/key", "HDMNEMONIC");
        let env = StaticEnv::new();

        let err = provider.provide("rinkeby", &env).unwrap_err();
        match err {
            ConfigError::MissingCredential {
                environment,
                variable,
            } => {
                assert_eq!(environment, "rinkeby");
                assert_eq!(variable, "HDMNEMONIC");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_hdwallet_provider_empty_secret() {
        let provider = HdWalletProvider::new("hdwallet", "https://gateway.example/key", "HDMNEMONIC");
        let env = StaticEnv::new().with("HDMNEMONIC", "");

        assert!(matches!(
            provider.provide("rinkeby", &env),
            Err(ConfigError::MissingCredential { .. })
        ));
    }

    #[test]
    fn test_mnemonic_debug_is_redacted() {
        let mnemonic = Mnemonic::new("legal winner thank year wave".to_string());
        let printed = format!("{:?}", mnemonic);
        assert!(!printed.contains("winner"));
        assert!(printed.contains("redacted"));
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = ProviderRegistry::new();
        registry.register(Box::new(HdWalletProvider::new(
            "hdwallet",
            "https://gateway.example/key",
            "HDMNEMONIC",
        )));

        assert!(registry.get("hdwallet").is_some());
        assert!(registry.get("vault").is_none());
        assert_eq!(registry.ids(), vec!["hdwallet".to_string()]);
    }
}
