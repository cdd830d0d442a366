//! Static asset tables.
//!
//! - [`AssetAliases`] maps user-facing symbols and network names to the
//!   upstream's canonical ids.
//! - [`FallbackTable`] holds the last-resort prices for alias lookups.

mod aliases;
mod fallback;

pub use aliases::{AssetAliases, AVALANCHE, BINANCE_COIN, ETHEREUM, POLYGON, SOLANA};
pub use fallback::FallbackTable;
