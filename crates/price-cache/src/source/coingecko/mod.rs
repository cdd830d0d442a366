//! CoinGecko price source.
//!
//! Uses two public endpoints:
//! - `/simple/price` for current prices, many ids per request
//! - `/coins/{id}/market_chart` for price history

mod models;

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use log::{debug, warn};
use num_traits::FromPrimitive;
use reqwest::{Client, StatusCode, Url};
use rust_decimal::Decimal;

use crate::config::PriceCacheConfig;
use crate::errors::PriceError;
use crate::models::PricePoint;
use crate::source::rate_limiter::RateLimiter;
use crate::source::PriceSource;

use models::{MarketChartResponse, SimplePriceResponse};

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// CoinGecko-backed price source.
pub struct CoinGeckoSource {
    client: Client,
    base_url: Url,
    vs_currency: String,
    request_timeout: Duration,
    limiter: RateLimiter,
}

impl CoinGeckoSource {
    /// Create a source from the cache configuration.
    pub fn new(config: &PriceCacheConfig) -> Result<Self, PriceError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| PriceError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| PriceError::Config(format!("Invalid base URL '{}': {}", config.base_url, e)))?;

        Ok(Self {
            client,
            base_url,
            vs_currency: config.vs_currency.clone(),
            request_timeout: config.request_timeout,
            limiter: RateLimiter::new(config.requests_per_minute, config.burst_capacity),
        })
    }

    /// Build `{base}/simple/price?ids=..&vs_currencies=..`.
    fn simple_price_url(&self, asset_ids: &[String]) -> Result<Url, PriceError> {
        let mut url = self.endpoint(&["simple", "price"])?;
        url.query_pairs_mut()
            .append_pair("ids", &asset_ids.join(","))
            .append_pair("vs_currencies", &self.vs_currency);
        Ok(url)
    }

    /// Build `{base}/coins/{id}/market_chart?vs_currency=..&days=..`.
    fn market_chart_url(&self, asset_id: &str, days: u32) -> Result<Url, PriceError> {
        let mut url = self.endpoint(&["coins", asset_id, "market_chart"])?;
        url.query_pairs_mut()
            .append_pair("vs_currency", &self.vs_currency)
            .append_pair("days", &days.to_string());
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, PriceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PriceError::Config(format!("Base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a GET and return the body of a successful response.
    ///
    /// The request timeout covers the rate limiter wait too, so a drained
    /// bucket fails the fetch instead of stalling the caller.
    async fn get_body(&self, url: Url) -> Result<Vec<u8>, PriceError> {
        tokio::time::timeout(self.request_timeout, self.send_get(url))
            .await
            .map_err(|_| PriceError::Timeout {
                provider: PROVIDER_ID.to_string(),
            })?
    }

    async fn send_get(&self, url: Url) -> Result<Vec<u8>, PriceError> {
        self.limiter.acquire().await;
        debug!("{}: GET {}", PROVIDER_ID, url);

        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| PriceError::from_reqwest(PROVIDER_ID, e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(PriceError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            return Err(PriceError::Status {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PriceError::from_reqwest(PROVIDER_ID, e))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl PriceSource for CoinGeckoSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_prices(
        &self,
        asset_ids: &[String],
    ) -> Result<HashMap<String, Decimal>, PriceError> {
        if asset_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let url = self.simple_price_url(asset_ids)?;
        let body = self.get_body(url).await?;
        let mut prices = parse_simple_prices(&body, &self.vs_currency)?;

        let requested: HashSet<&str> = asset_ids.iter().map(String::as_str).collect();
        prices.retain(|id, _| requested.contains(id.as_str()));
        Ok(prices)
    }

    async fn fetch_history(
        &self,
        asset_id: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, PriceError> {
        if days == 0 {
            return Err(PriceError::InvalidDays(days));
        }

        let url = self.market_chart_url(asset_id, days)?;
        let body = self.get_body(url).await?;
        parse_market_chart(&body)
    }
}

/// Parse a `/simple/price` body into `id -> price` in `vs_currency`.
///
/// Ids without a usable quote for the currency are skipped.
fn parse_simple_prices(
    body: &[u8],
    vs_currency: &str,
) -> Result<HashMap<String, Decimal>, PriceError> {
    let parsed: SimplePriceResponse =
        serde_json::from_slice(body).map_err(|e| PriceError::MalformedPayload {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;

    let quotes_by_id = match parsed {
        SimplePriceResponse::Prices(quotes_by_id) => quotes_by_id,
        SimplePriceResponse::Error(envelope) => {
            return Err(PriceError::MalformedPayload {
                provider: PROVIDER_ID.to_string(),
                message: format!("error response: {}", envelope.status),
            });
        }
    };

    let mut prices = HashMap::with_capacity(quotes_by_id.len());
    for (id, quotes) in quotes_by_id {
        match quotes.get(vs_currency).copied().flatten().and_then(to_price) {
            Some(price) => {
                prices.insert(id, price);
            }
            None => warn!("{}: no usable {} price for {}", PROVIDER_ID, vs_currency, id),
        }
    }
    Ok(prices)
}

/// Parse a `/market_chart` body into a series ordered by timestamp.
fn parse_market_chart(body: &[u8]) -> Result<Vec<PricePoint>, PriceError> {
    let parsed: MarketChartResponse =
        serde_json::from_slice(body).map_err(|e| PriceError::MalformedPayload {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;

    let mut points: Vec<PricePoint> = parsed
        .prices
        .into_iter()
        .filter_map(|(millis, price)| {
            let timestamp = Utc.timestamp_millis_opt(millis as i64).single()?;
            let price = to_price(price?)?;
            Some(PricePoint::new(timestamp, price))
        })
        .collect();

    points.sort_by_key(|p| p.timestamp);
    Ok(points)
}

/// Convert a raw quote, rejecting non-finite and non-positive values.
fn to_price(raw: f64) -> Option<Decimal> {
    if !raw.is_finite() || raw <= 0.0 {
        return None;
    }
    Decimal::from_f64(raw)
}
