// cleantext/src/cli.rs
//! Command-line interface definition for the cleantext application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cleantext",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clean a free-text CSV column into stopword-filtered tokens",
    long_about = "cleantext strips emails, markup fragments and URL-like runs from a text column, lowercases it, removes punctuation and stopwords, optionally stems what is left, and writes the whole table back out as CSV with the column replaced by token lists.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `cleantext` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cleans one column of a CSV file and writes the result.
    #[command(about = "Clean one column of a CSV file and write the result.")]
    Clean(CleanCommand),

    /// Lists the redaction rules that would be applied, in order.
    #[command(about = "List the active redaction rules in application order.")]
    Rules(RulesCommand),
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    /// Input CSV file with a header row.
    #[arg(long, short = 'i', value_name = "FILE", help = "Input CSV file with a header row.")]
    pub input: PathBuf,

    /// Name of the text column to clean.
    #[arg(long, short = 'c', value_name = "NAME", help = "Name of the text column to clean.")]
    pub column: String,

    /// Stem surviving tokens.
    #[arg(long, short = 's', help = "Stem surviving tokens with the Snowball stemmer.")]
    pub stem: bool,

    /// Output CSV path.
    #[arg(long, short = 'o', value_name = "FILE", default_value = cleantext_core::DEFAULT_OUTPUT_FILE, help = "Output CSV path (overwritten if it exists).")]
    pub output: PathBuf,

    /// Path to a custom configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "CLEANTEXT_CONFIG", help = "Path to a custom configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Additional stopwords (comma-separated).
    #[arg(long = "extra-stopwords", value_delimiter = ',', help = "Additional stopwords to filter (comma-separated).")]
    pub extra_stopwords: Vec<String>,

    /// Fail on non-text cells instead of converting them.
    #[arg(long = "strict-cells", help = "Fail on non-text cells instead of converting them to text.")]
    pub strict_cells: bool,

    /// Suppress the run summary.
    #[arg(long = "no-summary", help = "Suppress the run summary.")]
    pub no_summary: bool,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesCommand {
    /// Path to a custom configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "CLEANTEXT_CONFIG", help = "Path to a custom configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,
}
