//! Built-in deployment network presets

pub mod development;
pub mod rinkeby;
pub mod ropsten;

use serde::{Deserialize, Serialize};

use crate::declaration::{DeclarationSet, NetworkDeclaration};
use crate::provider::ProviderRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkKind {
    Development,
    Ropsten,
    Rinkeby,
}

impl NetworkKind {
    /// Environment label used in the declaration table
    pub fn name(&self) -> &'static str {
        match self {
            NetworkKind::Development => "development",
            NetworkKind::Ropsten => "ropsten",
            NetworkKind::Rinkeby => "rinkeby",
        }
    }
}

impl std::str::FromStr for NetworkKind {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(NetworkKind::Development),
            "ropsten" => Ok(NetworkKind::Ropsten),
            "rinkeby" => Ok(NetworkKind::Rinkeby),
            _ => Err(crate::error::ConfigError::InvalidNetwork(s.to_string())),
        }
    }
}

/// Declaration table covering all built-in networks
///
/// The defaults layer carries the shared local rpc endpoint; each preset
/// declares only what differs from it.
pub fn builtin_declarations() -> DeclarationSet {
    let mut set = DeclarationSet::default();

    set.defaults = NetworkDeclaration {
        host: Some("127.0.0.1".to_string()),
        port: Some(8545),
        chain_id: None,
        gas_limit: None,
        gas_price: None,
        from: None,
        provider: None,
    };

    set.networks.insert(
        NetworkKind::Development.name().to_string(),
        development::development_declaration(),
    );
    set.networks.insert(
        NetworkKind::Ropsten.name().to_string(),
        ropsten::ropsten_declaration(),
    );
    set.networks.insert(
        NetworkKind::Rinkeby.name().to_string(),
        rinkeby::rinkeby_declaration(),
    );

    set
}

/// Registry holding the providers the built-in networks reference
pub fn builtin_providers() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.register(Box::new(rinkeby::hdwallet_provider()));
    registry
}

// Re-export network declarations
pub use development::development_declaration;
pub use rinkeby::rinkeby_declaration;
pub use ropsten::{ropsten_declaration, ropsten_low_fee_override};
