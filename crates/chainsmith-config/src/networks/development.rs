use crate::declaration::NetworkDeclaration;

/// Local development node declaration
///
/// Endpoint comes from the shared defaults layer (127.0.0.1:8545). The
/// sender address is deliberately left unset: a local node's accounts are
/// operator-specific, so `from` is supplied through CHAINSMITH_FROM at load
/// time.
pub fn development_declaration() -> NetworkDeclaration {
    NetworkDeclaration {
        host: None,
        port: None,
        chain_id: Some(1337),
        gas_limit: Some(6_721_975),
        gas_price: Some(20_000_000_000),
        from: None,
        provider: None,
    }
}
