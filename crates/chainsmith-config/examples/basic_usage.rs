use chainsmith_config::loader::FileLoader;
use chainsmith_config::{
    builtin_declarations, builtin_providers, ConfigResolver, ConfigUtils, Connection, NetworkKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Chainsmith Configuration Basic Usage Example");
    println!("============================================\n");

    // Example 1: Resolve a built-in network
    println!("1. Resolving built-in networks:");

    let resolver = ConfigResolver::new(builtin_declarations(), builtin_providers());

    let ropsten = resolver.resolve(NetworkKind::Ropsten.name())?;
    println!(
        "   Ropsten - Chain ID: {}, Gas Limit: {}, Gas Price: {}",
        ropsten.chain_id, ropsten.gas_limit, ropsten.gas_price
    );
    if let Connection::Static { host, port } = &ropsten.connection {
        println!("   Ropsten endpoint: {}:{}", host, port);
    }

    // Example 2: Save and reload the declaration table
    println!("\n2. Saving and reloading declarations:");

    let output_dir = "./examples_output";
    ConfigUtils::ensure_config_directory(output_dir)?;

    let declarations_path = format!("{}/networks.toml", output_dir);
    FileLoader::save_toml(resolver.declarations(), &declarations_path).await?;
    println!("   Saved declarations to: {}", declarations_path);

    let reloaded = FileLoader::load_toml(&declarations_path).await?;
    println!("   Reloaded networks: {:?}", reloaded.names());

    // Example 3: Named overrides
    println!("\n3. Applying a named override:");

    let mut declarations = builtin_declarations();
    declarations.push_override(
        NetworkKind::Ropsten.name(),
        chainsmith_config::networks::ropsten_low_fee_override(),
    );

    let resolver = ConfigResolver::new(declarations, builtin_providers());
    let low_fee = resolver.resolve(NetworkKind::Ropsten.name())?;
    println!("   Ropsten gas price with low-fee override: {}", low_fee.gas_price);

    // Example 4: Error reporting
    println!("\n4. Resolution errors:");

    match resolver.resolve("nonexistent") {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   nonexistent network: {}", e),
    }

    match resolver.resolve(NetworkKind::Development.name()) {
        Ok(profile) => println!("   development sender: {:?}", profile.sender),
        Err(e) => println!("   development without a sender: {}", e),
    }

    Ok(())
}
