//! User-facing symbol and network names mapped to canonical upstream ids.

use std::collections::HashMap;

/// Canonical id for Ether. Also the target for unknown aliases.
pub const ETHEREUM: &str = "ethereum";
/// Canonical id for Solana.
pub const SOLANA: &str = "solana";
/// Canonical id for Polygon's native token.
pub const POLYGON: &str = "matic-network";
/// Canonical id for BNB.
pub const BINANCE_COIN: &str = "binancecoin";
/// Canonical id for Avalanche.
pub const AVALANCHE: &str = "avalanche-2";

/// Default alias table: (alias, canonical id).
///
/// Layer-2 networks that settle in ETH price as ETH.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("ethereum", ETHEREUM),
    ("eth", ETHEREUM),
    ("arbitrum", ETHEREUM),
    ("optimism", ETHEREUM),
    ("base", ETHEREUM),
    ("solana", SOLANA),
    ("sol", SOLANA),
    ("polygon", POLYGON),
    ("matic", POLYGON),
    ("matic-network", POLYGON),
    ("bsc", BINANCE_COIN),
    ("bnb", BINANCE_COIN),
    ("binancecoin", BINANCE_COIN),
    ("avalanche", AVALANCHE),
    ("avax", AVALANCHE),
    ("avalanche-2", AVALANCHE),
];

/// Normalizes an alias for table lookups.
pub(crate) fn normalize_alias(alias: &str) -> String {
    alias.trim().to_ascii_lowercase()
}

/// Immutable alias table, built once at startup.
#[derive(Clone, Debug)]
pub struct AssetAliases {
    mappings: HashMap<&'static str, &'static str>,
}

impl Default for AssetAliases {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetAliases {
    /// Create the alias table with the default mappings.
    pub fn new() -> Self {
        Self {
            mappings: DEFAULT_ALIASES.iter().copied().collect(),
        }
    }

    /// Resolve an alias to its canonical id, if the alias is known.
    pub fn lookup(&self, alias: &str) -> Option<&'static str> {
        self.mappings.get(normalize_alias(alias).as_str()).copied()
    }

    /// Resolve an alias to its canonical id. Unknown aliases resolve to
    /// [`ETHEREUM`].
    pub fn resolve(&self, alias: &str) -> &'static str {
        self.lookup(alias).unwrap_or(ETHEREUM)
    }

    /// Distinct canonical ids reachable through the table, sorted.
    pub fn canonical_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.mappings.values().copied().collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
