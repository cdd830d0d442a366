use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cached price for one canonical asset.
///
/// Entries are replaced wholesale on every successful fetch, never edited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Canonical upstream identifier (e.g. "ethereum")
    pub asset_id: String,

    /// Price in the configured reference currency
    pub price: Decimal,

    /// When the price was fetched from the upstream
    pub fetched_at: DateTime<Utc>,
}

impl PriceEntry {
    pub fn new(asset_id: impl Into<String>, price: Decimal, fetched_at: DateTime<Utc>) -> Self {
        Self {
            asset_id: asset_id.into(),
            price,
            fetched_at,
        }
    }

    /// Time elapsed since the fetch, clamped at zero for clock skew.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.fetched_at).to_std().unwrap_or(Duration::ZERO)
    }

    /// Whether the entry is still inside the freshness window.
    pub fn is_fresh(&self, now: DateTime<Utc>, cache_duration: Duration) -> bool {
        // A fetch stamped in the future counts as age zero.
        self.age(now) < cache_duration
    }
}

/// One sample of a price history series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: Decimal) -> Self {
        Self { timestamp, price }
    }
}

/// Diagnostic view of a cache entry, stale or not.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CachedPrice {
    pub asset_id: String,
    pub price: Decimal,
    pub fetched_at: DateTime<Utc>,
    /// Age at the time the snapshot was taken
    pub age: Duration,
}

impl CachedPrice {
    pub fn from_entry(entry: &PriceEntry, now: DateTime<Utc>) -> Self {
        Self {
            asset_id: entry.asset_id.clone(),
            price: entry.price,
            fetched_at: entry.fetched_at,
            age: entry.age(now),
        }
    }
}
