use chainsmith_config::loader::EnvLoader;
use chainsmith_config::networks::rinkeby;
use chainsmith_config::{
    builtin_declarations, builtin_providers, ConfigError, ConfigResolver, Connection,
    DeclarationSet, NetworkDeclaration, ProviderRegistry, Sender, StaticEnv,
};

fn builtin_resolver() -> ConfigResolver {
    ConfigResolver::new(builtin_declarations(), builtin_providers())
        .with_env_source(Box::new(StaticEnv::new()))
}

/// The ropsten declaration resolves to its exact declared values
#[test]
fn test_resolve_ropsten_exact_fields() {
    let profile = builtin_resolver().resolve("ropsten").unwrap();

    assert_eq!(profile.name, "ropsten");
    assert_eq!(profile.chain_id, 3);
    assert_eq!(profile.gas_limit, 4_700_036);
    assert_eq!(profile.gas_price, 60_000_000_000);
    assert_eq!(
        profile.connection,
        Connection::Static {
            host: "127.0.0.1".to_string(),
            port: 8545,
        }
    );
    assert_eq!(
        profile.sender,
        Sender::Address("0xdfffc978720962e2770bc7ea5c1d304b99862e20".to_string())
    );
}

#[test]
fn test_unknown_environment() {
    let err = builtin_resolver().resolve("nonexistent").unwrap_err();
    match err {
        ConfigError::UnknownEnvironment { name } => assert_eq!(name, "nonexistent"),
        other => panic!("unexpected error: {}", other),
    }
}

/// A provider-backed network without its secret fails with the variable name
#[test]
fn test_missing_credential() {
    let err = builtin_resolver().resolve("rinkeby").unwrap_err();
    match err {
        ConfigError::MissingCredential {
            environment,
            variable,
        } => {
            assert_eq!(environment, "rinkeby");
            assert_eq!(variable, rinkeby::MNEMONIC_VAR);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_rinkeby_resolves_with_mnemonic() {
    let env = StaticEnv::new().with(rinkeby::MNEMONIC_VAR, "legal winner thank year wave");
    let resolver = ConfigResolver::new(builtin_declarations(), builtin_providers())
        .with_env_source(Box::new(env));

    let profile = resolver.resolve("rinkeby").unwrap();
    assert_eq!(profile.chain_id, 4);
    assert_eq!(profile.gas_limit, 7_484_176);
    assert_eq!(profile.gas_price, 9_000_000_000);
    assert_eq!(
        profile.connection,
        Connection::Endpoint {
            url: rinkeby::RINKEBY_ENDPOINT.to_string(),
        }
    );
    assert_eq!(
        profile.sender,
        Sender::Derived {
            provider: "hdwallet".to_string(),
        }
    );
}

fn single_network_set(declaration: NetworkDeclaration) -> DeclarationSet {
    let mut set = DeclarationSet::default();
    set.networks.insert("custom".to_string(), declaration);
    set
}

#[test]
fn test_zero_gas_limit_rejected() {
    let set = single_network_set(NetworkDeclaration {
        host: Some("127.0.0.1".to_string()),
        port: Some(8545),
        chain_id: Some(99),
        gas_limit: Some(0),
        gas_price: Some(1_000_000_000),
        from: Some("0xdfffc978720962e2770bc7ea5c1d304b99862e20".to_string()),
        provider: None,
    });

    let resolver = ConfigResolver::new(set, ProviderRegistry::new())
        .with_env_source(Box::new(StaticEnv::new()));
    let err = resolver.resolve("custom").unwrap_err();
    match err {
        ConfigError::InvalidProfile {
            environment,
            reason,
        } => {
            assert_eq!(environment, "custom");
            assert!(reason.contains("gas_limit"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_numeric_fields_rejected() {
    let set = single_network_set(NetworkDeclaration {
        host: Some("127.0.0.1".to_string()),
        port: Some(8545),
        chain_id: None,
        gas_limit: Some(4_700_036),
        gas_price: Some(1_000_000_000),
        from: Some("0xdfffc978720962e2770bc7ea5c1d304b99862e20".to_string()),
        provider: None,
    });

    let resolver = ConfigResolver::new(set, ProviderRegistry::new())
        .with_env_source(Box::new(StaticEnv::new()));
    assert!(matches!(
        resolver.resolve("custom"),
        Err(ConfigError::InvalidProfile { .. })
    ));
}

/// Two successive calls with unchanged environment state return equal profiles
#[test]
fn test_resolution_is_idempotent() {
    let resolver = builtin_resolver();

    let first = resolver.resolve("ropsten").unwrap();
    let second = resolver.resolve("ropsten").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_static_endpoint_and_provider_conflict() {
    let set = single_network_set(NetworkDeclaration {
        host: Some("127.0.0.1".to_string()),
        port: Some(8545),
        chain_id: Some(99),
        gas_limit: Some(4_700_036),
        gas_price: Some(1_000_000_000),
        from: None,
        provider: Some("hdwallet".to_string()),
    });

    let resolver = ConfigResolver::new(set, builtin_providers())
        .with_env_source(Box::new(StaticEnv::new()));
    let err = resolver.resolve("custom").unwrap_err();
    match err {
        ConfigError::InvalidProfile { reason, .. } => {
            assert!(reason.contains("credential provider"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_unregistered_provider_rejected() {
    let set = single_network_set(NetworkDeclaration {
        chain_id: Some(99),
        gas_limit: Some(4_700_036),
        gas_price: Some(1_000_000_000),
        provider: Some("vault".to_string()),
        ..Default::default()
    });

    let resolver = ConfigResolver::new(set, ProviderRegistry::new())
        .with_env_source(Box::new(StaticEnv::new()));
    let err = resolver.resolve("custom").unwrap_err();
    match err {
        ConfigError::InvalidProfile { reason, .. } => assert!(reason.contains("vault")),
        other => panic!("unexpected error: {}", other),
    }
}

/// The development preset has no sender until one is supplied externally
#[test]
fn test_development_requires_external_sender() {
    let err = builtin_resolver().resolve("development").unwrap_err();
    match err {
        ConfigError::InvalidProfile { reason, .. } => assert!(reason.contains("sender")),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_env_override_supplies_development_sender() {
    let mut declarations = builtin_declarations();
    let env = StaticEnv::new()
        .with("CHAINSMITH_NETWORK", "development")
        .with(
            "CHAINSMITH_FROM",
            "0xdfffc978720962e2770bc7ea5c1d304b99862e20",
        );
    EnvLoader::apply_overrides_from(&mut declarations, &env).unwrap();

    let resolver = ConfigResolver::new(declarations, builtin_providers())
        .with_env_source(Box::new(StaticEnv::new()));
    let profile = resolver.resolve("development").unwrap();

    assert_eq!(profile.chain_id, 1337);
    assert_eq!(
        profile.sender,
        Sender::Address("0xdfffc978720962e2770bc7ea5c1d304b99862e20".to_string())
    );
}

#[test]
fn test_invalid_sender_address_rejected() {
    let set = single_network_set(NetworkDeclaration {
        host: Some("127.0.0.1".to_string()),
        port: Some(8545),
        chain_id: Some(99),
        gas_limit: Some(4_700_036),
        gas_price: Some(1_000_000_000),
        from: Some("not-an-address".to_string()),
        provider: None,
    });

    let resolver = ConfigResolver::new(set, ProviderRegistry::new())
        .with_env_source(Box::new(StaticEnv::new()));
    assert!(matches!(
        resolver.resolve("custom"),
        Err(ConfigError::InvalidProfile { .. })
    ));
}
