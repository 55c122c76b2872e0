//! The per-row cleaning pipeline.
//!
//! Redactor → Normalizer → Stopword filter → (Stemmer). The variant is fixed
//! when the pipeline is built; the stemmer only exists in the stemming
//! variant. Rows carry no state between each other, so `process` walks them
//! in order and writes results back in place.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use std::fmt;
use std::sync::Arc;

use crate::config::{CellPolicy, CleanConfig, StopwordConfig};
use crate::dataset::{Cell, Dataset, MISSING};
use crate::errors::CleanTextError;
use crate::normalizer::normalize;
use crate::redactor::{RedactionTally, Redactor};
use crate::stemmer::{SnowballStemmer, Stemmer};
use crate::stopwords::StopwordSet;

/// Which stages a pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineVariant {
    /// Redact, normalize, drop stopwords.
    CleanOnly,
    /// Same as `CleanOnly`, then stem every surviving token.
    CleanAndStem,
}

impl fmt::Display for PipelineVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineVariant::CleanOnly => f.write_str("clean-only"),
            PipelineVariant::CleanAndStem => f.write_str("clean-and-stem"),
        }
    }
}

/// Counters collected while processing a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub rows: usize,
    pub missing_cells: usize,
    pub coerced_cells: usize,
    /// Tokens produced by the normalizer, before stopword filtering.
    pub tokens_in: usize,
    /// Tokens written to the dataset.
    pub tokens_out: usize,
    pub redactions: RedactionTally,
}

impl PipelineReport {
    pub fn stopwords_removed(&self) -> usize {
        self.tokens_in - self.tokens_out
    }
}

pub struct CleaningPipeline {
    redactor: Redactor,
    stopwords: Arc<StopwordSet>,
    stemmer: Option<Box<dyn Stemmer>>,
    cell_policy: CellPolicy,
}

impl fmt::Debug for CleaningPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleaningPipeline")
            .field("variant", &self.variant())
            .field("rules", &self.redactor.compiled_rules().rules.len())
            .field("stopwords", &self.stopwords.len())
            .field("cell_policy", &self.cell_policy)
            .finish()
    }
}

impl CleaningPipeline {
    pub fn clean_only(redactor: Redactor, stopwords: Arc<StopwordSet>) -> Self {
        Self {
            redactor,
            stopwords,
            stemmer: None,
            cell_policy: CellPolicy::default(),
        }
    }

    pub fn clean_and_stem(
        redactor: Redactor,
        stopwords: Arc<StopwordSet>,
        stemmer: Box<dyn Stemmer>,
    ) -> Self {
        Self {
            redactor,
            stopwords,
            stemmer: Some(stemmer),
            cell_policy: CellPolicy::default(),
        }
    }

    /// Builds every capability `config` describes, up front.
    ///
    /// The default stopword settings reuse the process-wide English set. The
    /// stemmer is created only for [`PipelineVariant::CleanAndStem`], in the
    /// configured stopword language.
    pub fn from_config(config: &CleanConfig, variant: PipelineVariant) -> Result<Self, CleanTextError> {
        let redactor = Redactor::new(config)?;
        let stopwords = if config.stopwords == StopwordConfig::default() {
            StopwordSet::english()?
        } else {
            Arc::new(StopwordSet::from_config(&config.stopwords)?)
        };

        let pipeline = match variant {
            PipelineVariant::CleanOnly => Self::clean_only(redactor, stopwords),
            PipelineVariant::CleanAndStem => {
                let stemmer = SnowballStemmer::new(&config.stopwords.language)?;
                Self::clean_and_stem(redactor, stopwords, Box::new(stemmer))
            }
        };
        debug!("Built pipeline: {:?}", pipeline);
        Ok(pipeline.with_cell_policy(config.cells))
    }

    pub fn with_cell_policy(mut self, cell_policy: CellPolicy) -> Self {
        self.cell_policy = cell_policy;
        self
    }

    pub fn variant(&self) -> PipelineVariant {
        if self.stemmer.is_some() {
            PipelineVariant::CleanAndStem
        } else {
            PipelineVariant::CleanOnly
        }
    }

    /// Runs every stage on one piece of text.
    pub fn clean_text(&self, text: &str) -> Vec<String> {
        self.clean_tallied(text, &mut RedactionTally::default()).1
    }

    /// Returns the normalizer's token count alongside the final tokens.
    fn clean_tallied(&self, text: &str, tally: &mut RedactionTally) -> (usize, Vec<String>) {
        let redacted = self.redactor.redact_with_tally(text, tally);
        let tokens = normalize(&redacted);
        let produced = tokens.len();
        let kept = self.stopwords.filter(tokens);
        let out = match &self.stemmer {
            Some(stemmer) => stemmer.stem_all(kept),
            None => kept,
        };
        (produced, out)
    }

    /// Turns a cell into the text the pipeline should see.
    ///
    /// Returns `None` for missing cells. `coerced` is set when a non-text
    /// value had to be rendered as text.
    fn cell_text(
        &self,
        cell: &Cell,
        row: usize,
        column: &str,
        coerced: &mut bool,
    ) -> Result<Option<String>, CleanTextError> {
        match cell {
            Cell::Missing => Ok(None),
            Cell::Text(text) => Ok(Some(text.clone())),
            other if self.cell_policy == CellPolicy::Strict => Err(CleanTextError::InvalidCellType {
                row,
                column: column.to_string(),
                found: other.kind(),
            }),
            Cell::Tokens(tokens) => {
                *coerced = true;
                Ok(Some(tokens.join(" ")))
            }
            other => {
                *coerced = true;
                Ok(Some(other.to_string()))
            }
        }
    }

    /// Cleans one cell. Missing cells become an empty token list.
    pub fn clean_cell(&self, cell: &Cell) -> Result<Vec<String>, CleanTextError> {
        let mut coerced = false;
        Ok(self
            .cell_text(cell, 0, "", &mut coerced)?
            .map(|text| self.clean_text(&text))
            .unwrap_or_default())
    }

    /// Replaces every cell of `column` with its cleaned token list.
    ///
    /// Fails with `ColumnNotFound` before touching any row. All rows are
    /// cleaned before the first one is written back, so an error leaves the
    /// dataset unchanged. Rows shorter than the header are padded with
    /// [`Cell::Missing`].
    pub fn process(&self, dataset: &mut Dataset, column: &str) -> Result<PipelineReport, CleanTextError> {
        let idx = dataset.column_index(column)?;
        info!(
            "Running {} pipeline on column '{}' ({} rows).",
            self.variant(),
            column,
            dataset.len()
        );

        let mut report = PipelineReport::default();
        let mut cleaned = Vec::with_capacity(dataset.len());
        for (row_number, row) in dataset.rows.iter().enumerate() {
            let cell = row.get(idx).unwrap_or(&MISSING);
            let mut coerced = false;
            let text = self.cell_text(cell, row_number, column, &mut coerced)?;
            if coerced {
                warn!(
                    "Row {}: coerced {} cell in column '{}' to text.",
                    row_number,
                    cell.kind(),
                    column
                );
                report.coerced_cells += 1;
            }

            let tokens = match text {
                Some(text) => {
                    let (produced, tokens) = self.clean_tallied(&text, &mut report.redactions);
                    report.tokens_in += produced;
                    tokens
                }
                None => {
                    report.missing_cells += 1;
                    Vec::new()
                }
            };
            report.tokens_out += tokens.len();
            cleaned.push(tokens);
            report.rows += 1;
        }

        let width = dataset.headers.len();
        for (row, tokens) in dataset.rows.iter_mut().zip(cleaned) {
            if row.len() < width {
                row.resize(width, Cell::Missing);
            }
            row[idx] = Cell::Tokens(tokens);
        }

        info!(
            "Pipeline finished: {} rows, {} tokens kept, {} stopwords removed, {} redactions.",
            report.rows,
            report.tokens_out,
            report.stopwords_removed(),
            report.redactions.total()
        );
        Ok(report)
    }
}
