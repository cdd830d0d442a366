use adtivity_price_cache::{create_shared_cache, PriceCache, PriceCacheConfig, SharedPriceCache};
use serde_json::{json, Value};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Command;

pub fn init_tracing() {
    let log_format = std::env::var("PRICE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays valid JSON.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_cache(config: &PriceCacheConfig) -> anyhow::Result<SharedPriceCache> {
    let cache = create_shared_cache(config)?;
    tracing::debug!(
        "Price cache ready with {} known assets, window {:?}",
        cache.aliases().canonical_ids().len(),
        cache.cache_duration()
    );
    Ok(cache)
}

/// Execute one command against the cache and render the result as JSON.
pub async fn run(cache: &PriceCache, command: Command) -> Value {
    match command {
        Command::Price { asset_id } => {
            let price = cache.get_price(&asset_id).await;
            json!({ "asset_id": asset_id, "price": price })
        }
        Command::Alias { alias } => {
            let asset_id = cache.aliases().resolve(&alias);
            let price = cache.get_price_for_alias(&alias).await;
            json!({ "alias": alias, "asset_id": asset_id, "price": price })
        }
        Command::Many { asset_ids } => {
            let prices = cache.get_many(&asset_ids).await;
            json!({ "prices": prices })
        }
        Command::History { asset_id, days } => {
            let points = cache.get_price_history(&asset_id, days).await;
            json!({ "asset_id": asset_id, "days": days, "prices": points })
        }
        Command::Snapshot => {
            let ids = cache.aliases().canonical_ids();
            cache.get_many(&ids).await;
            let entries: Vec<Value> = cache
                .snapshot()
                .into_iter()
                .map(|row| {
                    json!({
                        "asset_id": row.asset_id,
                        "price": row.price,
                        "fetched_at": row.fetched_at.to_rfc3339(),
                        "age_seconds": row.age.as_secs_f64(),
                    })
                })
                .collect();
            json!({ "entries": entries })
        }
    }
}
