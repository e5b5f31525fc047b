use crate::declaration::NetworkDeclaration;
use crate::provider::HdWalletProvider;

/// Hosted gateway endpoint for rinkeby
pub const RINKEBY_ENDPOINT: &str = "https://rinkeby.infura.io/PwcyIGszs2x6sS6NIU1Q";

/// Environment variable carrying the wallet mnemonic
pub const MNEMONIC_VAR: &str = "HDMNEMONIC";

/// Rinkeby test network, reached through a hosted gateway with a wallet
/// derived from the operator's mnemonic
pub fn rinkeby_declaration() -> NetworkDeclaration {
    NetworkDeclaration {
        host: None,
        port: None,
        chain_id: Some(4),
        gas_limit: Some(7_484_176),
        gas_price: Some(9_000_000_000),
        from: None,
        provider: Some("hdwallet".to_string()),
    }
}

/// Provider instance backing the rinkeby declaration
pub fn hdwallet_provider() -> HdWalletProvider {
    HdWalletProvider::new("hdwallet", RINKEBY_ENDPOINT, MNEMONIC_VAR)
}
