// File: cleantext-core/src/headless.rs

//! Convenience wrappers for one-shot, non-interactive cleaning.
//!
//! [`stop_clean`] and [`stop_and_stem`] run the built-in configuration and
//! write [`DEFAULT_OUTPUT_FILE`] into the current directory. [`headless_clean`]
//! is the general form.

use log::info;
use std::path::Path;

use crate::config::CleanConfig;
use crate::dataset::Dataset;
use crate::errors::CleanTextError;
use crate::pipeline::{CleaningPipeline, PipelineReport, PipelineVariant};
use crate::sink::{CsvSink, DEFAULT_OUTPUT_FILE};

/// Cleans `column` of `dataset` in place and writes the whole dataset to `output`.
///
/// Every capability is built and the column is looked up before any row is
/// touched or any file is created.
pub fn headless_clean(
    dataset: &mut Dataset,
    column: &str,
    config: &CleanConfig,
    variant: PipelineVariant,
    output: &Path,
) -> Result<PipelineReport, CleanTextError> {
    let pipeline = CleaningPipeline::from_config(config, variant)?;
    let report = pipeline.process(dataset, column)?;
    CsvSink::new(output).write(dataset)?;
    info!("Wrote cleaned dataset to {}", output.display());
    Ok(report)
}

/// Redact, normalize and drop stopwords, then write `clean.csv`.
pub fn stop_clean(dataset: &mut Dataset, column: &str) -> Result<PipelineReport, CleanTextError> {
    let config = CleanConfig::load_default_rules()?;
    headless_clean(
        dataset,
        column,
        &config,
        PipelineVariant::CleanOnly,
        Path::new(DEFAULT_OUTPUT_FILE),
    )
}

/// Like [`stop_clean`], with English Snowball stemming as a final stage.
pub fn stop_and_stem(dataset: &mut Dataset, column: &str) -> Result<PipelineReport, CleanTextError> {
    let config = CleanConfig::load_default_rules()?;
    headless_clean(
        dataset,
        column,
        &config,
        PipelineVariant::CleanAndStem,
        Path::new(DEFAULT_OUTPUT_FILE),
    )
}
