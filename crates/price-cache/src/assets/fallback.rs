//! Hard-coded prices used when neither the cache nor the upstream can answer.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aliases::normalize_alias;

/// Static fallback prices keyed by alias or network name.
///
/// Lookups use the caller's original key, not the canonical id, so two
/// aliases of the same asset could carry different defaults.
#[derive(Clone, Debug)]
pub struct FallbackTable {
    prices: HashMap<&'static str, Decimal>,
    default_price: Decimal,
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackTable {
    /// Create the table with the default prices. Unknown keys fall back to
    /// the ethereum price.
    pub fn new() -> Self {
        let eth = dec!(2000.0);
        let sol = dec!(100.0);
        let matic = dec!(0.8);
        let bnb = dec!(300.0);
        let avax = dec!(25.0);

        let prices = HashMap::from([
            ("ethereum", eth),
            ("eth", eth),
            ("arbitrum", eth),
            ("optimism", eth),
            ("base", eth),
            ("solana", sol),
            ("sol", sol),
            ("polygon", matic),
            ("matic", matic),
            ("matic-network", matic),
            ("bsc", bnb),
            ("bnb", bnb),
            ("binancecoin", bnb),
            ("avalanche", avax),
            ("avax", avax),
            ("avalanche-2", avax),
        ]);

        Self {
            prices,
            default_price: eth,
        }
    }

    /// Fallback price for a key, or the ethereum default.
    pub fn price_for(&self, key: &str) -> Decimal {
        self.prices
            .get(normalize_alias(key).as_str())
            .copied()
            .unwrap_or(self.default_price)
    }
}
