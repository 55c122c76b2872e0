// cleantext/src/commands/clean.rs
//! The `clean` command: CSV in, cleaned CSV out.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io;

use cleantext_core::{
    CellPolicy, CleaningPipeline, CsvSink, Dataset, PipelineVariant,
};

use crate::cli::CleanCommand;
use crate::commands::load_config;
use crate::ui::{output_format, summary};

/// Runs the `clean` command.
///
/// Everything that can fail before output (config, capabilities, column
/// lookup) is done before the output file is opened.
pub fn run(cmd: &CleanCommand, quiet: bool) -> Result<()> {
    info!("Starting clean of column '{}' in {}", cmd.column, cmd.input.display());

    let mut config = load_config(cmd.config.as_deref(), &cmd.enable, &cmd.disable)?;
    config.stopwords.extra.extend(cmd.extra_stopwords.iter().cloned());
    if cmd.strict_cells {
        config.cells = CellPolicy::Strict;
    }

    let variant = if cmd.stem {
        PipelineVariant::CleanAndStem
    } else {
        PipelineVariant::CleanOnly
    };
    let pipeline = CleaningPipeline::from_config(&config, variant)
        .context("Failed to initialize the cleaning pipeline")?;

    let mut dataset = Dataset::from_csv_path(&cmd.input)
        .with_context(|| format!("Failed to load dataset from {}", cmd.input.display()))?;
    debug!("Loaded {} rows with columns {:?}", dataset.len(), dataset.headers);

    let report = pipeline
        .process(&mut dataset, &cmd.column)
        .context("Cleaning failed")?;

    CsvSink::new(&cmd.output).write(&dataset)?;

    if !quiet {
        let color = output_format::stderr_supports_color();
        output_format::print_success_message(
            &mut io::stderr(),
            &format!("Wrote {} rows to {}", report.rows, cmd.output.display()),
            color,
        )?;
        if !cmd.no_summary {
            summary::print_summary(&report, variant, &mut io::stderr(), color)?;
        }
    }

    info!("Clean completed.");
    Ok(())
}
