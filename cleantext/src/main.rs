// cleantext/src/main.rs
//! cleantext entry point.

use anyhow::Result;
use clap::Parser;

use cleantext::cli::{Cli, Commands};
use cleantext::commands::{clean, rules};
use cleantext::logger;

fn main() -> Result<()> {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    match args.command {
        Commands::Clean(cmd) => clean::run(&cmd, args.quiet),
        Commands::Rules(cmd) => rules::run(&cmd),
    }
}
