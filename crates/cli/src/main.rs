use anyhow::Result;
use clap::Parser;

mod commands;
mod config;

use config::{Cli, CliConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);

    stockroom_observability::init(config.log_format);
    tracing::debug!(file = %config.data_file.display(), "using data file");

    commands::run(cli.command, &config)
}
