//! Upstream price source trait.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::PriceError;
use crate::models::PricePoint;

/// An upstream that can quote current prices and price history.
///
/// Implementations make exactly one upstream attempt per call. The cache
/// decides what to do with failures.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use adtivity_price_cache::source::PriceSource;
///
/// struct StaticSource;
///
/// #[async_trait]
/// impl PriceSource for StaticSource {
///     fn id(&self) -> &'static str {
///         "STATIC"
///     }
///
///     async fn fetch_prices(&self, asset_ids: &[String]) -> Result<HashMap<String, Decimal>, PriceError> {
///         Ok(asset_ids.iter().map(|id| (id.clone(), Decimal::ONE)).collect())
///     }
///
///     // ... implement fetch_history
/// }
/// ```
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Identifier used in logs and errors (e.g. "COINGECKO").
    fn id(&self) -> &'static str;

    /// Fetch current prices for a batch of canonical ids in one request.
    ///
    /// Ids the upstream does not know are left out of the returned map;
    /// that alone is not an error.
    async fn fetch_prices(
        &self,
        asset_ids: &[String],
    ) -> Result<HashMap<String, Decimal>, PriceError>;

    /// Fetch the price series for the last `days` days, oldest first.
    async fn fetch_history(&self, asset_id: &str, days: u32)
        -> Result<Vec<PricePoint>, PriceError>;
}
