//! Command-line surface and the settings resolved from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockroom_inventory::{DEFAULT_DATA_FILE, DEFAULT_LOW_STOCK_THRESHOLD};
use stockroom_observability::LogFormat;

/// stockroom - track item quantities in a JSON file
#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Inventory data file
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    /// Log output format (pretty or json)
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add stock for an item
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove stock from an item
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Print the quantity held for an item
    Get { item: String },

    /// List items below a threshold
    Low {
        #[arg(short, long, allow_negative_numbers = true, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
        threshold: i64,
    },

    /// Print every item and its quantity
    Report,

    /// Run the demonstration sequence against the data file
    Demo,
}

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub data_file: PathBuf,
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_file: cli.file.clone(),
            log_format: cli.log_format,
        }
    }
}
