//! Read-through price cache with lazy expiry and static fallbacks.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::assets::{AssetAliases, FallbackTable, ETHEREUM, SOLANA};
use crate::config::PriceCacheConfig;
use crate::errors::PriceError;
use crate::models::{CachedPrice, PriceEntry, PricePoint};
use crate::source::{CoinGeckoSource, PriceSource};

/// In-memory price cache in front of a [`PriceSource`].
///
/// Entries are checked for freshness when read; nothing expires in the
/// background. Stale entries stay in the map until a fetch overwrites them
/// or [`invalidate_all`](Self::invalidate_all) clears it. The map is never
/// locked across an upstream request.
pub struct PriceCache {
    source: Arc<dyn PriceSource>,
    entries: RwLock<HashMap<String, PriceEntry>>,
    cache_duration: Duration,
    aliases: AssetAliases,
    fallbacks: FallbackTable,
}

impl PriceCache {
    /// Create an empty cache over the given source.
    pub fn new(source: Arc<dyn PriceSource>, cache_duration: Duration) -> Self {
        Self {
            source,
            entries: RwLock::new(HashMap::new()),
            cache_duration,
            aliases: AssetAliases::new(),
            fallbacks: FallbackTable::new(),
        }
    }

    /// Create an empty cache backed by CoinGecko.
    pub fn from_config(config: &PriceCacheConfig) -> Result<Self, PriceError> {
        let source = CoinGeckoSource::new(config)?;
        Ok(Self::new(Arc::new(source), config.cache_duration))
    }

    /// How long a fetched price is served without refetching.
    pub fn cache_duration(&self) -> Duration {
        self.cache_duration
    }

    /// Alias table used by [`Self::get_price_for_alias`].
    pub fn aliases(&self) -> &AssetAliases {
        &self.aliases
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Current price for a canonical asset id.
    ///
    /// Served from the cache while fresh, otherwise fetched and stored.
    /// Returns `None` if the fetch fails for any reason.
    pub async fn get_price(&self, asset_id: &str) -> Option<Decimal> {
        match self.try_get_price(asset_id).await {
            Ok(price) => Some(price),
            Err(e) => {
                warn!(
                    "{}: price lookup for '{}' failed ({}): {}",
                    self.source.id(),
                    asset_id,
                    e.kind(),
                    e
                );
                None
            }
        }
    }

    /// Current price for a symbol or network name. Never fails.
    ///
    /// The alias is resolved to a canonical id (unknown aliases price as
    /// ethereum). If no price can be obtained, the fallback for the alias
    /// as given is returned.
    pub async fn get_price_for_alias(&self, alias: &str) -> Decimal {
        let asset_id = self.aliases.resolve(alias);
        match self.get_price(asset_id).await {
            Some(price) => price,
            None => {
                let fallback = self.fallbacks.price_for(alias);
                warn!(
                    "Using fallback price {} for '{}' (resolved to '{}')",
                    fallback, alias, asset_id
                );
                fallback
            }
        }
    }

    /// Current ETH price, or its fallback.
    pub async fn eth_price(&self) -> Decimal {
        self.get_price_for_alias(ETHEREUM).await
    }

    /// Current SOL price, or its fallback.
    pub async fn sol_price(&self) -> Decimal {
        self.get_price_for_alias(SOLANA).await
    }

    /// Prices for several canonical ids.
    ///
    /// Fresh cached prices are used as is; everything else is requested in a
    /// single upstream call. Ids the upstream does not return are left out.
    /// If that call fails, only the fresh cached prices are returned.
    pub async fn get_many<I, S>(&self, asset_ids: I) -> HashMap<String, Decimal>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: BTreeSet<String> = asset_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .filter(|id| !id.trim().is_empty())
            .collect();

        let (mut prices, missing) = self.partition_fresh(&requested);

        if missing.is_empty() {
            debug!("Price batch of {} served from cache", prices.len());
            return prices;
        }

        match self.fetch_and_store(&missing).await {
            Ok(fetched) => {
                if fetched.len() < missing.len() {
                    debug!(
                        "Upstream returned {} of {} requested prices",
                        fetched.len(),
                        missing.len()
                    );
                }
                prices.extend(fetched);
            }
            Err(e) => {
                warn!(
                    "{}: batch price lookup for {:?} failed ({}): {}",
                    self.source.id(),
                    missing,
                    e.kind(),
                    e
                );
            }
        }

        prices
    }

    /// Price series for the last `days` days, oldest first.
    ///
    /// Never cached. Returns `None` on any failure or when `days` is zero.
    pub async fn get_price_history(&self, asset_id: &str, days: u32) -> Option<Vec<PricePoint>> {
        match self.try_get_history(asset_id, days).await {
            Ok(points) => Some(points),
            Err(e) => {
                warn!(
                    "{}: price history for '{}' ({} days) failed ({}): {}",
                    self.source.id(),
                    asset_id,
                    days,
                    e.kind(),
                    e
                );
                None
            }
        }
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        let mut entries = self.write_entries();
        let cleared = entries.len();
        entries.clear();
        info!("Price cache cleared ({} entries)", cleared);
    }

    /// Every entry currently held, stale ones included, ordered by asset id.
    pub fn snapshot(&self) -> Vec<CachedPrice> {
        let now = Utc::now();
        let mut rows: Vec<CachedPrice> = self
            .read_entries()
            .values()
            .map(|entry| CachedPrice::from_entry(entry, now))
            .collect();
        rows.sort_by(|a, b| a.asset_id.cmp(&b.asset_id));
        rows
    }

    /// Number of entries held, stale ones included.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Whether the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    async fn try_get_price(&self, asset_id: &str) -> Result<Decimal, PriceError> {
        if asset_id.trim().is_empty() {
            return Err(PriceError::EmptyAssetId);
        }

        if let Some(price) = self.fresh_price(asset_id) {
            debug!("Price cache hit for '{}'", asset_id);
            return Ok(price);
        }

        debug!("Price cache miss for '{}'", asset_id);
        let ids = [asset_id.to_string()];
        let fetched = self.fetch_and_store(&ids).await?;
        fetched
            .get(asset_id)
            .copied()
            .ok_or_else(|| PriceError::AssetMissing(asset_id.to_string()))
    }

    async fn try_get_history(
        &self,
        asset_id: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, PriceError> {
        if asset_id.trim().is_empty() {
            return Err(PriceError::EmptyAssetId);
        }
        if days == 0 {
            return Err(PriceError::InvalidDays(days));
        }
        self.source.fetch_history(asset_id, days).await
    }

    /// One upstream request for `asset_ids`; stores whatever comes back.
    async fn fetch_and_store(
        &self,
        asset_ids: &[String],
    ) -> Result<HashMap<String, Decimal>, PriceError> {
        let fetched = self.source.fetch_prices(asset_ids).await?;

        let now = Utc::now();
        let mut entries = self.write_entries();
        for (asset_id, price) in &fetched {
            entries.insert(asset_id.clone(), PriceEntry::new(asset_id.clone(), *price, now));
        }

        Ok(fetched)
    }

    fn fresh_price(&self, asset_id: &str) -> Option<Decimal> {
        let now = Utc::now();
        self.read_entries()
            .get(asset_id)
            .filter(|entry| entry.is_fresh(now, self.cache_duration))
            .map(|entry| entry.price)
    }

    /// Split ids into fresh cached prices and ids that need a fetch.
    fn partition_fresh(
        &self,
        asset_ids: &BTreeSet<String>,
    ) -> (HashMap<String, Decimal>, Vec<String>) {
        let now = Utc::now();
        let entries = self.read_entries();

        let mut cached = HashMap::new();
        let mut missing = Vec::new();
        for asset_id in asset_ids {
            match entries.get(asset_id) {
                Some(entry) if entry.is_fresh(now, self.cache_duration) => {
                    cached.insert(asset_id.clone(), entry.price);
                }
                _ => missing.push(asset_id.clone()),
            }
        }
        (cached, missing)
    }

    /// Read the entries, recovering from poison.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, PriceEntry>> {
        self.entries.read().unwrap_or_else(|poisoned| {
            warn!("Price cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Write the entries, recovering from poison.
    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, PriceEntry>> {
        self.entries.write().unwrap_or_else(|poisoned| {
            warn!("Price cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AVALANCHE, BINANCE_COIN};
    use async_trait::async_trait;
    use chrono::{Duration as ChronoDuration, TimeZone};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const TTL: Duration = Duration::from_secs(300);

    #[derive(Clone, Copy)]
    enum Failure {
        Timeout,
        Status(u16),
    }

    struct MockSource {
        prices: Mutex<HashMap<String, Decimal>>,
        failure: Mutex<Option<Failure>>,
        price_calls: AtomicUsize,
        history_calls: AtomicUsize,
        requests: Mutex<Vec<Vec<String>>>,
    }

    impl MockSource {
        fn new(prices: &[(&str, Decimal)]) -> Self {
            Self {
                prices: Mutex::new(
                    prices
                        .iter()
                        .map(|(id, price)| (id.to_string(), *price))
                        .collect(),
                ),
                failure: Mutex::new(None),
                price_calls: AtomicUsize::new(0),
                history_calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(failure: Failure) -> Self {
            let source = Self::new(&[]);
            source.fail_with(Some(failure));
            source
        }

        fn fail_with(&self, failure: Option<Failure>) {
            *self.failure.lock().unwrap() = failure;
        }

        fn set_price(&self, asset_id: &str, price: Decimal) {
            self.prices
                .lock()
                .unwrap()
                .insert(asset_id.to_string(), price);
        }

        fn price_calls(&self) -> usize {
            self.price_calls.load(Ordering::SeqCst)
        }

        fn last_request(&self) -> Vec<String> {
            self.requests.lock().unwrap().last().cloned().unwrap_or_default()
        }

        fn check_failure(&self) -> Result<(), PriceError> {
            match *self.failure.lock().unwrap() {
                Some(Failure::Timeout) => Err(PriceError::Timeout {
                    provider: "MOCK".to_string(),
                }),
                Some(Failure::Status(status)) => Err(PriceError::Status {
                    provider: "MOCK".to_string(),
                    status,
                }),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl PriceSource for MockSource {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn fetch_prices(
            &self,
            asset_ids: &[String],
        ) -> Result<HashMap<String, Decimal>, PriceError> {
            self.price_calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(asset_ids.to_vec());
            self.check_failure()?;

            let prices = self.prices.lock().unwrap();
            Ok(asset_ids
                .iter()
                .filter_map(|id| prices.get(id).map(|p| (id.clone(), *p)))
                .collect())
        }

        async fn fetch_history(
            &self,
            asset_id: &str,
            days: u32,
        ) -> Result<Vec<PricePoint>, PriceError> {
            self.history_calls.fetch_add(1, Ordering::SeqCst);
            self.check_failure()?;

            let price = self
                .prices
                .lock()
                .unwrap()
                .get(asset_id)
                .copied()
                .ok_or_else(|| PriceError::AssetMissing(asset_id.to_string()))?;
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            Ok((0..days)
                .map(|d| PricePoint::new(start + ChronoDuration::days(d as i64), price))
                .collect())
        }
    }

    fn cache_with(source: &Arc<MockSource>) -> PriceCache {
        PriceCache::new(source.clone(), TTL)
    }

    /// Move an entry's fetch time into the past.
    fn backdate(cache: &PriceCache, asset_id: &str, by: Duration) {
        let mut entries = cache.entries.write().unwrap();
        let entry = entries.get_mut(asset_id).unwrap();
        entry.fetched_at = entry.fetched_at - ChronoDuration::from_std(by).unwrap();
    }

    #[tokio::test]
    async fn test_miss_fetches_and_stores() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500.0))]));
        let cache = cache_with(&source);

        let before = Utc::now();
        assert_eq!(cache.get_price("ethereum").await, Some(dec!(2500.0)));

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].asset_id, "ethereum");
        assert_eq!(snapshot[0].price, dec!(2500));
        assert!(snapshot[0].fetched_at >= before);
        assert_eq!(source.last_request(), vec!["ethereum".to_string()]);
    }

    #[tokio::test]
    async fn test_second_lookup_within_window_is_cached() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500))]));
        let cache = cache_with(&source);

        cache.get_price("ethereum").await;
        source.set_price("ethereum", dec!(9999));
        let second = cache.get_price("ethereum").await;

        assert_eq!(second, Some(dec!(2500)));
        assert_eq!(source.price_calls(), 1);
    }

    #[tokio::test]
    async fn test_stale_entry_is_refetched() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500))]));
        let cache = cache_with(&source);

        cache.get_price("ethereum").await;
        backdate(&cache, "ethereum", TTL);
        let stale_at = cache.snapshot()[0].fetched_at;

        source.set_price("ethereum", dec!(2600));
        assert_eq!(cache.get_price("ethereum").await, Some(dec!(2600)));
        assert_eq!(source.price_calls(), 2);
        assert!(cache.snapshot()[0].fetched_at > stale_at);
    }

    #[tokio::test]
    async fn test_stale_entry_not_served_when_upstream_fails() {
        let source = Arc::new(MockSource::new(&[("solana", dec!(100))]));
        let cache = cache_with(&source);

        cache.get_price("solana").await;
        backdate(&cache, "solana", TTL * 2);
        source.fail_with(Some(Failure::Status(503)));

        assert_eq!(cache.get_price("solana").await, None);
        // The stale entry is still held
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_none() {
        let source = Arc::new(MockSource::failing(Failure::Timeout));
        let cache = cache_with(&source);

        assert_eq!(cache.get_price("ethereum").await, None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_asset_absent_from_response_returns_none() {
        let source = Arc::new(MockSource::new(&[]));
        let cache = cache_with(&source);

        assert_eq!(cache.get_price("not-a-coin").await, None);
        assert_eq!(source.price_calls(), 1);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_empty_asset_id_is_rejected_without_fetch() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500))]));
        let cache = cache_with(&source);

        assert_eq!(cache.get_price("").await, None);
        assert_eq!(cache.get_price("   ").await, None);
        assert_eq!(source.price_calls(), 0);
    }

    #[tokio::test]
    async fn test_alias_resolves_to_canonical_id() {
        let source = Arc::new(MockSource::new(&[(AVALANCHE, dec!(31.5))]));
        let cache = cache_with(&source);

        assert_eq!(cache.get_price_for_alias("avax").await, dec!(31.5));
        assert_eq!(source.last_request(), vec![AVALANCHE.to_string()]);
    }

    #[tokio::test]
    async fn test_layer_two_networks_share_ethereum_price() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500))]));
        let cache = cache_with(&source);

        assert_eq!(cache.get_price_for_alias("arbitrum").await, dec!(2500));
        assert_eq!(cache.get_price_for_alias("optimism").await, dec!(2500));
        assert_eq!(cache.get_price_for_alias("base").await, dec!(2500));
        assert_eq!(source.price_calls(), 1);
    }

    #[tokio::test]
    async fn test_alias_falls_back_on_timeout() {
        let source = Arc::new(MockSource::failing(Failure::Timeout));
        let cache = cache_with(&source);

        assert_eq!(cache.get_price_for_alias("avax").await, dec!(25.0));
        assert_eq!(cache.get_price_for_alias("polygon").await, dec!(0.8));
        assert_eq!(cache.get_price_for_alias("bsc").await, dec!(300));
    }

    #[tokio::test]
    async fn test_unknown_alias_uses_ethereum_fallback() {
        let source = Arc::new(MockSource::failing(Failure::Status(500)));
        let cache = cache_with(&source);

        let price = cache.get_price_for_alias("nonexistent-alias").await;
        assert_eq!(price, dec!(2000));
        assert_eq!(source.last_request(), vec!["ethereum".to_string()]);
    }

    #[tokio::test]
    async fn test_alias_prefers_fresh_cache_over_fallback() {
        let source = Arc::new(MockSource::new(&[("solana", dec!(180))]));
        let cache = cache_with(&source);

        cache.get_price("solana").await;
        source.fail_with(Some(Failure::Timeout));

        assert_eq!(cache.get_price_for_alias("sol").await, dec!(180));
    }

    #[tokio::test]
    async fn test_eth_and_sol_helpers() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500))]));
        let cache = cache_with(&source);

        assert_eq!(cache.eth_price().await, dec!(2500));
        assert_eq!(cache.sol_price().await, dec!(100));
    }

    #[tokio::test]
    async fn test_get_many_fetches_only_uncached_in_one_call() {
        let source = Arc::new(MockSource::new(&[
            ("ethereum", dec!(2500)),
            ("solana", dec!(100)),
            (BINANCE_COIN, dec!(310)),
        ]));
        let cache = cache_with(&source);

        cache.get_price("ethereum").await;
        assert_eq!(source.price_calls(), 1);

        let prices = cache.get_many(["ethereum", "solana", BINANCE_COIN]).await;

        assert_eq!(source.price_calls(), 2);
        assert_eq!(
            source.last_request(),
            vec![BINANCE_COIN.to_string(), "solana".to_string()]
        );
        assert_eq!(prices.len(), 3);
        assert_eq!(prices["ethereum"], dec!(2500));
        assert_eq!(prices[BINANCE_COIN], dec!(310));
        assert_eq!(cache.len(), 3);
    }

    #[tokio::test]
    async fn test_get_many_all_cached_makes_no_call() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500)), ("solana", dec!(100))]));
        let cache = cache_with(&source);

        cache.get_many(["ethereum", "solana"]).await;
        let prices = cache.get_many(["solana", "ethereum", "solana"]).await;

        assert_eq!(source.price_calls(), 1);
        assert_eq!(prices.len(), 2);
    }

    #[tokio::test]
    async fn test_get_many_omits_ids_missing_upstream() {
        let source = Arc::new(MockSource::new(&[("solana", dec!(100))]));
        let cache = cache_with(&source);

        let prices = cache.get_many(["solana", "bsc"]).await;

        assert_eq!(prices.len(), 1);
        assert_eq!(prices["solana"], dec!(100));
        assert!(!prices.contains_key("bsc"));
    }

    #[tokio::test]
    async fn test_get_many_failure_returns_fresh_cached_only() {
        let source = Arc::new(MockSource::new(&[
            ("ethereum", dec!(2500)),
            ("solana", dec!(100)),
        ]));
        let cache = cache_with(&source);

        cache.get_many(["ethereum", "solana"]).await;
        backdate(&cache, "solana", TTL);
        source.fail_with(Some(Failure::Timeout));

        let prices = cache.get_many(["ethereum", "solana", AVALANCHE]).await;

        assert_eq!(prices.len(), 1);
        assert_eq!(prices["ethereum"], dec!(2500));
        assert_eq!(
            source.last_request(),
            vec![AVALANCHE.to_string(), "solana".to_string()]
        );
    }

    #[tokio::test]
    async fn test_get_many_empty_input() {
        let source = Arc::new(MockSource::new(&[]));
        let cache = cache_with(&source);

        let prices = cache.get_many(Vec::<String>::new()).await;

        assert!(prices.is_empty());
        assert_eq!(source.price_calls(), 0);
    }

    #[tokio::test]
    async fn test_invalidate_all_forces_refetch() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500)), ("solana", dec!(100))]));
        let cache = cache_with(&source);

        cache.get_many(["ethereum", "solana"]).await;
        cache.invalidate_all();
        assert!(cache.is_empty());

        cache.get_price("ethereum").await;
        assert_eq!(source.price_calls(), 2);
        assert_eq!(source.last_request(), vec!["ethereum".to_string()]);
    }

    #[tokio::test]
    async fn test_history_bypasses_cache() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500))]));
        let cache = cache_with(&source);

        let first = cache.get_price_history("ethereum", 7).await.unwrap();
        let second = cache.get_price_history("ethereum", 7).await.unwrap();

        assert_eq!(first.len(), 7);
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(source.history_calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_history_rejects_zero_days() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500))]));
        let cache = cache_with(&source);

        assert_eq!(cache.get_price_history("ethereum", 0).await, None);
        assert_eq!(source.history_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_history_failure_returns_none() {
        let source = Arc::new(MockSource::failing(Failure::Status(429)));
        let cache = cache_with(&source);

        assert_eq!(cache.get_price_history("ethereum", 30).await, None);
    }

    #[tokio::test]
    async fn test_snapshot_includes_stale_entries_with_age() {
        let source = Arc::new(MockSource::new(&[("solana", dec!(100)), ("ethereum", dec!(2500))]));
        let cache = cache_with(&source);

        cache.get_many(["solana", "ethereum"]).await;
        backdate(&cache, "solana", Duration::from_secs(600));

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].asset_id, "ethereum");
        assert_eq!(snapshot[1].asset_id, "solana");
        assert!(snapshot[1].age >= Duration::from_secs(600));
        assert!(snapshot[0].age < Duration::from_secs(600));
    }

    #[tokio::test]
    async fn test_zero_ttl_never_hits() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500))]));
        let cache = PriceCache::new(source.clone(), Duration::ZERO);

        cache.get_price("ethereum").await;
        cache.get_price("ethereum").await;

        assert_eq!(source.price_calls(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_lookups() {
        let source = Arc::new(MockSource::new(&[("ethereum", dec!(2500)), ("solana", dec!(100))]));
        let cache = Arc::new(cache_with(&source));

        let mut handles = Vec::new();
        for i in 0..16 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                let id = if i % 2 == 0 { "ethereum" } else { "solana" };
                cache.get_price(id).await
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }
        assert_eq!(cache.len(), 2);
    }
}
