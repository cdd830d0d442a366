//! Runtime configuration for the price cache and its upstream client.

use std::str::FromStr;
use std::time::Duration;

use log::warn;

/// Default upstream base URL (CoinGecko public API).
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Default reference currency.
pub const DEFAULT_VS_CURRENCY: &str = "usd";

/// Default freshness window: 5 minutes.
pub const DEFAULT_CACHE_DURATION: Duration = Duration::from_secs(300);

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default upstream budget. The public API allows roughly 30 calls a minute.
pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 30;

/// Default number of requests allowed back to back.
pub const DEFAULT_BURST_CAPACITY: u32 = 5;

pub const ENV_BASE_URL: &str = "PRICE_API_BASE_URL";
pub const ENV_VS_CURRENCY: &str = "PRICE_VS_CURRENCY";
pub const ENV_CACHE_TTL_SECS: &str = "PRICE_CACHE_TTL_SECS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "PRICE_REQUEST_TIMEOUT_SECS";
pub const ENV_REQUESTS_PER_MINUTE: &str = "PRICE_REQUESTS_PER_MINUTE";
pub const ENV_BURST_CAPACITY: &str = "PRICE_BURST_CAPACITY";

/// Price cache configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceCacheConfig {
    /// Upstream API base, without a trailing slash.
    pub base_url: String,
    /// Reference currency code, lower case (e.g. "usd").
    pub vs_currency: String,
    /// How long a fetched price stays valid.
    pub cache_duration: Duration,
    /// Timeout applied to every upstream request.
    pub request_timeout: Duration,
    /// Client-side request budget for the upstream.
    pub requests_per_minute: u32,
    /// Requests allowed back to back before pacing kicks in.
    pub burst_capacity: u32,
}

impl Default for PriceCacheConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            cache_duration: DEFAULT_CACHE_DURATION,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            requests_per_minute: DEFAULT_REQUESTS_PER_MINUTE,
            burst_capacity: DEFAULT_BURST_CAPACITY,
        }
    }
}

impl PriceCacheConfig {
    /// Build the configuration from `PRICE_*` environment variables.
    ///
    /// Missing variables use the defaults. Invalid values are logged and
    /// also replaced by the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup(ENV_BASE_URL)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);

        let vs_currency = lookup(ENV_VS_CURRENCY)
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.vs_currency);

        let cache_duration = parse_or(&lookup, ENV_CACHE_TTL_SECS, None)
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache_duration);

        let request_timeout = parse_or(&lookup, ENV_REQUEST_TIMEOUT_SECS, Some(1))
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let requests_per_minute = parse_or(&lookup, ENV_REQUESTS_PER_MINUTE, Some(1))
            .unwrap_or(defaults.requests_per_minute);

        let burst_capacity =
            parse_or(&lookup, ENV_BURST_CAPACITY, Some(1)).unwrap_or(defaults.burst_capacity);

        Self {
            base_url,
            vs_currency,
            cache_duration,
            request_timeout,
            requests_per_minute,
            burst_capacity,
        }
    }
}

/// Parse a numeric variable, rejecting values below `min`.
fn parse_or<F, T>(lookup: &F, key: &str, min: Option<T>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Copy + std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) if min.map_or(true, |m| value >= m) => Some(value),
        Ok(value) => {
            warn!("Ignoring {}={}: value is below the minimum", key, value);
            None
        }
        Err(_) => {
            warn!("Ignoring {}='{}': not a valid number", key, raw);
            None
        }
    }
}
