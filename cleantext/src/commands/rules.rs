// cleantext/src/commands/rules.rs
//! The `rules` command: show what the redactor would apply.

use anyhow::Result;
use std::io::{self, Write};

use cleantext_core::CleanConfig;

use crate::cli::RulesCommand;
use crate::commands::load_config;
use crate::ui::summary;

pub fn run(cmd: &RulesCommand) -> Result<()> {
    let config = load_config(cmd.config.as_deref(), &cmd.enable, &cmd.disable)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_rules(&config, &mut out)
}

fn print_rules<W: Write>(config: &CleanConfig, out: &mut W) -> Result<()> {
    if config.rules.is_empty() {
        writeln!(out, "No active redaction rules.")?;
        return Ok(());
    }
    writeln!(out, "{}", summary::rules_table(&config.rules))?;
    Ok(())
}
