//! Upstream price sources.
//!
//! This module contains:
//! - The `PriceSource` trait the cache fetches through
//! - A token bucket limiter that paces upstream requests
//! - The CoinGecko implementation

mod rate_limiter;
mod traits;

pub mod coingecko;

pub use coingecko::CoinGeckoSource;
pub use rate_limiter::RateLimiter;
pub use traits::PriceSource;
