use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Partial declaration of one deployment target, as written by the operator
///
/// Every field is optional; missing values may be supplied by the defaults
/// layer, a named override, or an environment variable before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDeclaration {
    /// Endpoint host, mutually exclusive with `provider`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Endpoint port, mutually exclusive with `provider`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Numeric identifier of the target chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    /// Upper bound on gas per transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,

    /// Price per gas unit in the smallest currency unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,

    /// Literal sender address, mutually exclusive with `provider`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Credential provider id supplying endpoint and signer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl NetworkDeclaration {
    /// Field-wise merge, values from `over` winning where present
    pub fn merged_with(&self, over: &NetworkDeclaration) -> NetworkDeclaration {
        NetworkDeclaration {
            host: over.host.clone().or_else(|| self.host.clone()),
            port: over.port.or(self.port),
            chain_id: over.chain_id.or(self.chain_id),
            gas_limit: over.gas_limit.or(self.gas_limit),
            gas_price: over.gas_price.or(self.gas_price),
            from: over.from.clone().or_else(|| self.from.clone()),
            provider: over.provider.clone().or_else(|| self.provider.clone()),
        }
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == NetworkDeclaration::default()
    }
}

/// Static declaration table with explicit override layering
///
/// The effective declaration of an environment is built from three layers,
/// later layers winning field-wise:
///
/// ```text
/// defaults  <-  networks[name]  <-  overrides[name]
/// ```
///
/// The defaults layer carries values shared by every network (the local rpc
/// endpoint); the overrides layer holds operator- or environment-supplied
/// amendments without touching the declarations themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationSet {
    /// Base layer applied to every network
    #[serde(default)]
    pub defaults: NetworkDeclaration,

    /// Per-environment declarations
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkDeclaration>,

    /// Named overrides applied after the per-environment layer
    #[serde(default)]
    pub overrides: BTreeMap<String, NetworkDeclaration>,
}

impl DeclarationSet {
    /// Names of all declared environments
    pub fn names(&self) -> Vec<String> {
        self.networks.keys().cloned().collect()
    }

    /// Whether an environment is declared
    pub fn contains(&self, name: &str) -> bool {
        self.networks.contains_key(name)
    }

    /// Effective declaration for an environment, or None when undeclared
    ///
    /// Provider-backed networks take their endpoint and sender from the
    /// provider; the shared defaults for host, port, and sender address are
    /// not applied to them.
    pub fn effective(&self, name: &str) -> Option<NetworkDeclaration> {
        let mut layered = self.networks.get(name)?.clone();
        if let Some(over) = self.overrides.get(name) {
            layered = layered.merged_with(over);
        }

        let mut base = self.defaults.clone();
        if layered.provider.is_some() {
            base.host = None;
            base.port = None;
            base.from = None;
        }

        Some(base.merged_with(&layered))
    }

    /// Merge an override into the named entry of the overrides layer
    pub fn push_override(&mut self, name: &str, over: NetworkDeclaration) {
        let merged = match self.overrides.get(name) {
            Some(existing) => existing.merged_with(&over),
            None => over,
        };
        self.overrides.insert(name.to_string(), merged);
    }

    /// Layer another declaration set over this one
    ///
    /// Used when a declaration file amends the built-in presets: the other
    /// set's values win wherever both sides declare a field.
    pub fn merge_from(&mut self, other: DeclarationSet) {
        self.defaults = self.defaults.merged_with(&other.defaults);

        for (name, declaration) in other.networks {
            let merged = match self.networks.get(&name) {
                Some(existing) => existing.merged_with(&declaration),
                None => declaration,
            };
            self.networks.insert(name, merged);
        }

        for (name, declaration) in other.overrides {
            self.push_override(&name, declaration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(chain_id: u64, gas_price: u64) -> NetworkDeclaration {
        NetworkDeclaration {
            chain_id: Some(chain_id),
            gas_price: Some(gas_price),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_prefers_override_fields() {
        let base = NetworkDeclaration {
            host: Some("127.0.0.1".to_string()),
            port: Some(8545),
            gas_price: Some(60_000_000_000),
            ..Default::default()
        };
        let over = NetworkDeclaration {
            gas_price: Some(20_000_000_000),
            ..Default::default()
        };

        let merged = base.merged_with(&over);
        assert_eq!(merged.gas_price, Some(20_000_000_000));
        assert_eq!(merged.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(merged.port, Some(8545));
    }

    #[test]
    fn test_effective_applies_three_layers() {
        let mut set = DeclarationSet::default();
        set.defaults.host = Some("127.0.0.1".to_string());
        set.defaults.port = Some(8545);
        set.networks
            .insert("ropsten".to_string(), declaration(3, 60_000_000_000));
        set.push_override(
            "ropsten",
            NetworkDeclaration {
                gas_price: Some(20_000_000_000),
                ..Default::default()
            },
        );

        let effective = set.effective("ropsten").unwrap();
        assert_eq!(effective.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(effective.port, Some(8545));
        assert_eq!(effective.chain_id, Some(3));
        assert_eq!(effective.gas_price, Some(20_000_000_000));
    }

    #[test]
    fn test_effective_unknown_name() {
        let set = DeclarationSet::default();
        assert!(set.effective("nonexistent").is_none());
    }

    #[test]
    fn test_provider_networks_skip_endpoint_defaults() {
        let mut set = DeclarationSet::default();
        set.defaults.host = Some("127.0.0.1".to_string());
        set.defaults.port = Some(8545);
        set.defaults.from = Some("0xdfffc978720962e2770bc7ea5c1d304b99862e20".to_string());
        set.networks.insert(
            "rinkeby".to_string(),
            NetworkDeclaration {
                chain_id: Some(4),
                provider: Some("hdwallet".to_string()),
                ..Default::default()
            },
        );

        let effective = set.effective("rinkeby").unwrap();
        assert!(effective.host.is_none());
        assert!(effective.port.is_none());
        assert!(effective.from.is_none());
        assert_eq!(effective.provider.as_deref(), Some("hdwallet"));
    }

    #[test]
    fn test_push_override_merges_repeated_entries() {
        let mut set = DeclarationSet::default();
        set.push_override(
            "ropsten",
            NetworkDeclaration {
                gas_price: Some(20_000_000_000),
                ..Default::default()
            },
        );
        set.push_override(
            "ropsten",
            NetworkDeclaration {
                gas_limit: Some(5_000_000),
                ..Default::default()
            },
        );

        let over = set.overrides.get("ropsten").unwrap();
        assert_eq!(over.gas_price, Some(20_000_000_000));
        assert_eq!(over.gas_limit, Some(5_000_000));
    }

    #[test]
    fn test_merge_from_layers_file_over_builtins() {
        let mut base = DeclarationSet::default();
        base.networks
            .insert("ropsten".to_string(), declaration(3, 60_000_000_000));

        let mut file = DeclarationSet::default();
        file.networks
            .insert("ropsten".to_string(), declaration(3, 20_000_000_000));
        file.networks
            .insert("goerli".to_string(), declaration(5, 1_000_000_000));

        base.merge_from(file);
        assert_eq!(
            base.networks.get("ropsten").unwrap().gas_price,
            Some(20_000_000_000)
        );
        assert!(base.contains("goerli"));
    }
}
