//! Price cache models
//!
//! - `price` - Cached entries (PriceEntry), history samples (PricePoint) and
//!   snapshot rows (CachedPrice)

mod price;

pub use price::{CachedPrice, PriceEntry, PricePoint};
