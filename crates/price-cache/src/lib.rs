//! Adtivity Price Cache
//!
//! Current asset prices for the Adtivity backend, served from a short-lived
//! in-memory cache in front of an upstream price API.
//!
//! # Overview
//!
//! - Canonical-id lookups that report absence (`get_price`)
//! - Alias lookups that always produce a number (`get_price_for_alias`)
//! - Batched lookups issuing one upstream request for every miss (`get_many`)
//! - Uncached price history (`get_price_history`)
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Request handler | --> |   AssetAliases   |  (symbol/network -> canonical id)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    PriceCache    |  (fresh? return cached)
//!                          +------------------+
//!                                  | miss
//!                                  v
//!                          +------------------+
//!                          |   PriceSource    |  (CoinGecko, rate limited)
//!                          +------------------+
//!                                  | failure
//!                                  v
//!                          +------------------+
//!                          |  FallbackTable   |  (alias lookups only)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PriceCache`] - The cache itself; construct once and share
//! - [`PriceSource`] - Upstream abstraction; [`CoinGeckoSource`] implements it
//! - [`PriceEntry`] - One cached price with its fetch time
//! - [`PriceCacheConfig`] - Runtime settings, loadable from the environment
//! - [`PriceError`] - Internal failure type, never returned by cache lookups

pub mod assets;
pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod source;

pub use assets::{AssetAliases, FallbackTable};
pub use cache::{create_shared_cache, PriceCache, SharedPriceCache};
pub use config::PriceCacheConfig;
pub use errors::{FailureKind, PriceError};
pub use models::{CachedPrice, PriceEntry, PricePoint};
pub use source::{CoinGeckoSource, PriceSource, RateLimiter};
