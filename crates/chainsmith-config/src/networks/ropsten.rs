use crate::declaration::NetworkDeclaration;

/// Ropsten test network, reached through the shared local node endpoint
pub fn ropsten_declaration() -> NetworkDeclaration {
    NetworkDeclaration {
        host: None,
        port: None,
        chain_id: Some(3),
        gas_limit: Some(4_700_036),
        gas_price: Some(60_000_000_000),
        from: Some("0xdfffc978720962e2770bc7ea5c1d304b99862e20".to_string()),
        provider: None,
    }
}

/// Reduced-fee amendment for quiet periods, applied as a named override
pub fn ropsten_low_fee_override() -> NetworkDeclaration {
    NetworkDeclaration {
        gas_price: Some(20_000_000_000),
        ..Default::default()
    }
}
