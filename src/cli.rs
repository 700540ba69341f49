use clap::Parser;
use std::path::PathBuf;

use crate::types::{Controls, SortKey};

/// Feed location used when no --data flag is given, matching where the
/// fetch script drops its output
pub const DEFAULT_FEED_PATH: &str = "data/properties.json";

#[derive(Parser, Debug, Clone)]
#[command(name = "homescout")]
#[command(about = "Browse, filter, and sort a real-estate listings feed")]
#[command(version)]
pub struct CliArgs {
    /// Feed source: a JSON file path or an http(s) URL
    #[arg(long, short = 'd', value_name = "PATH_OR_URL", default_value = DEFAULT_FEED_PATH)]
    pub data: String,

    /// Keep only listings priced at or under this amount
    #[arg(long, value_name = "DOLLARS")]
    pub max_price: Option<u64>,

    /// Keep only listings with at least this many bedrooms
    #[arg(long, value_name = "COUNT")]
    pub min_beds: Option<u32>,

    /// Sort order: price-asc, price-desc, date-asc, or date-desc.
    /// Anything unrecognized falls back to date-desc.
    #[arg(long, value_name = "KEY", default_value = "date-desc")]
    pub sort: String,

    /// Read control changes from stdin and re-render after each one
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Print the filtered view as JSON instead of cards
    #[arg(long)]
    pub json: bool,

    /// Also save the filtered view as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub output_json: Option<PathBuf>,

    /// Override console width for card rendering (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.data.trim().is_empty() {
            return Err("--data must name a feed file or URL".to_string());
        }

        if self.max_price == Some(0) {
            return Err("--max-price must be a positive dollar amount".to_string());
        }

        if self.json && self.interactive {
            return Err("Cannot combine --json with --interactive".to_string());
        }

        Ok(())
    }

    /// Initial control values from the flags
    pub fn controls(&self) -> Controls {
        Controls {
            max_price: self.max_price,
            min_beds: self.min_beds,
            sort: SortKey::parse(&self.sort),
        }
    }
}
