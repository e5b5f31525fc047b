use chainsmith_config::{builtin_providers, ConfigLoader, ConfigResolver, NetworkKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Chainsmith Environment Override Example");
    println!("=======================================\n");

    // In practice these would be set externally
    std::env::set_var("CHAINSMITH_NETWORK", "development");
    std::env::set_var("CHAINSMITH_FROM", "0xdfffc978720962e2770bc7ea5c1d304b99862e20");
    std::env::set_var("CHAINSMITH_GAS_PRICE", "1000000000");

    let loader = ConfigLoader::new();
    let declarations = loader.load_with_overrides::<&str>(None).await?;

    let resolver = ConfigResolver::new(declarations, builtin_providers());
    let development = resolver.resolve(NetworkKind::Development.name())?;

    println!("Development profile after overrides:");
    println!("   chain_id:  {}", development.chain_id);
    println!("   gas_limit: {}", development.gas_limit);
    println!("   gas_price: {}", development.gas_price);
    println!("   sender:    {:?}", development.sender);

    Ok(())
}
