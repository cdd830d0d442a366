use clap::{Parser, Subcommand};

/// Query the Adtivity price cache from the command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Price for a canonical asset id (e.g. "ethereum"); null if unavailable
    Price { asset_id: String },

    /// Price for a symbol or network name (e.g. "avax", "arbitrum"); never null
    Alias { alias: String },

    /// Prices for several canonical ids in one upstream request
    Many {
        #[arg(required = true)]
        asset_ids: Vec<String>,
    },

    /// Price history for a canonical asset id
    History {
        asset_id: String,

        /// Window in days
        #[arg(short, long, default_value = "7")]
        days: u32,
    },

    /// Fetch every known asset, then print the cache contents
    Snapshot,
}
