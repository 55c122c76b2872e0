// cleantext/src/commands/mod.rs
//! Subcommand implementations.

pub mod clean;
pub mod rules;

use anyhow::Result;
use std::path::Path;

use cleantext_core::{merge_rules, CleanConfig};

/// Default rules merged with an optional user file, then filtered by the
/// enable/disable lists.
pub fn load_config(
    config_path: Option<&Path>,
    enable: &[String],
    disable: &[String],
) -> Result<CleanConfig> {
    let defaults = CleanConfig::load_default_rules()?;
    let user = config_path.map(|path| CleanConfig::load_from_file(path)).transpose()?;
    let mut config = merge_rules(defaults, user);
    config.set_active_rules(enable, disable);
    Ok(config)
}
