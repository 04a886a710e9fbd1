use anyhow::Result;
use clap::Parser;

use folio_engine::logging::{init_logging, LoggingConfig};

mod cli;
mod contact;
mod hero;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    match cli.command.unwrap_or_default() {
        Command::Hero(args) => hero::run(args),
        Command::Contact(args) => contact::run(args),
    }
}
