//! CoinGecko API response models.

use std::collections::HashMap;

use serde::Deserialize;

/// `/simple/price` body: `{ "<id>": { "<currency>": <price> } }`.
///
/// Prices can be `null` for delisted assets. Errors may arrive as
/// `{"status": {...}}` or `{"error": "..."}`, even with a 200 status.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SimplePriceResponse {
    Error(ErrorEnvelope),
    Prices(HashMap<String, HashMap<String, Option<f64>>>),
}

/// Error body returned in place of prices.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(alias = "error")]
    pub status: serde_json::Value,
}

/// `/coins/{id}/market_chart` body.
#[derive(Debug, Deserialize)]
pub struct MarketChartResponse {
    /// `[unix_millis, price]` pairs
    pub prices: Vec<(f64, Option<f64>)>,
    // market_caps and total_volumes are also returned; we only use prices
}
