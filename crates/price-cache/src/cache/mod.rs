//! Process-wide price cache.

mod price_cache;

use std::sync::Arc;

pub use price_cache::PriceCache;

use crate::config::PriceCacheConfig;
use crate::errors::PriceError;

/// Handle shared between request handlers.
pub type SharedPriceCache = Arc<PriceCache>;

/// Create a shared CoinGecko-backed cache from configuration.
pub fn create_shared_cache(config: &PriceCacheConfig) -> Result<SharedPriceCache, PriceError> {
    Ok(Arc::new(PriceCache::from_config(config)?))
}
