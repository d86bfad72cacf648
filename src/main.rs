// Load configuration
// Set up logging
// Read normalized records
// Print derived facts per record

use chain_record::config::Config;
use chain_record::models::{clean_memos, Direction, Tx};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Serialize)]
struct TxSummary<'a> {
    id: &'a str,
    coin: u32,
    date: Option<String>,
    addresses: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Configuration loaded: {:?}", config);

    let raw = tokio::fs::read_to_string(&config.records_path).await?;
    let mut txs: Vec<Tx> = serde_json::from_str(&raw)?;
    info!("Loaded {} records from {}", txs.len(), config.records_path);

    if config.clean_memos {
        clean_memos(&mut txs);
    }

    for tx in &txs {
        let mut summary = TxSummary {
            id: &tx.id,
            coin: tx.coin,
            date: tx.timestamp().map(|date| date.to_rfc3339()),
            addresses: tx.addresses(),
            direction: None,
            value: None,
        };

        if let Some(address) = &config.query_address {
            summary.direction = Some(tx.direction_for(address));

            if tx.is_utxo() {
                match tx.utxo_value_for(address) {
                    Ok(value) => summary.value = Some(value.to_string()),
                    Err(e) => warn!("Skipping value for tx {}: {}", tx.id, e),
                }
            }
        }

        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}
