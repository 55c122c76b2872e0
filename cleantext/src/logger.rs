// cleantext/src/logger.rs
//! Logging setup for the cleantext binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger` once per process.
///
/// With `Some(level)` that level applies to everything; with `None` the
/// `RUST_LOG` environment variable decides, defaulting to `warn`. Later
/// calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);
    let _ = builder.try_init();
}

/// Level implied by the global `--quiet` / `--debug` flags.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
