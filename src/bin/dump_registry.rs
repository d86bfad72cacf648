use chain_record::registry::{self, coin, TokenType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Token types ({}):", TokenType::ALL.len());
    for tag in TokenType::ALL {
        let version = registry::version_of(tag)?;
        println!("  {:<12} version {}", tag, version);
    }

    println!("Chains ({}):", coin::CHAINS.len());
    for chain in coin::CHAINS {
        let kind = if chain.evm { "evm" } else { "native" };
        match registry::classify(chain.id, "") {
            Some(tag) => println!("  {:<14} {:>10} {:<6} -> {}", chain.handle, chain.id, kind, tag),
            None => println!("  {:<14} {:>10} {:<6} -> (none)", chain.handle, chain.id, kind),
        }
    }

    println!("✅ Registry complete");
    Ok(())
}
