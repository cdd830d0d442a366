mod cli;
mod main_lib;

use adtivity_price_cache::PriceCacheConfig;
use clap::Parser;

use cli::Cli;
use main_lib::{build_cache, init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = PriceCacheConfig::from_env();
    tracing::info!(
        "Price source {} ({}), cache window {:?}",
        config.base_url,
        config.vs_currency,
        config.cache_duration
    );

    let cache = build_cache(&config)?;
    let output = run(&cache, cli.command).await;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
