// cleantext-core/src/lib.rs
//! # cleantext Core Library
//!
//! `cleantext-core` turns a free-text column of a tabular dataset into clean
//! token lists for downstream text analytics. Each cell goes through the same
//! fixed pipeline:
//!
//! 1. **Redaction**: ordered regex rules strip emails, `<...>` fragments and
//!    `www`/`http` prefixed runs.
//! 2. **Normalization**: punctuation is removed, text is lowercased and split
//!    on whitespace.
//! 3. **Stopword filtering**: tokens found in an immutable stopword set are
//!    dropped, order preserved.
//! 4. **Stemming** (optional): each surviving token is reduced to its
//!    Snowball stem.
//!
//! The cleaned dataset is then written to a CSV file.
//!
//! ## Modules
//!
//! * `config`: `RedactionRule`s and `CleanConfig`, loaded from YAML.
//! * `sanitizers`: compilation and caching of redaction rules.
//! * `redactor`: the redaction stage.
//! * `normalizer`: punctuation stripping and tokenization.
//! * `stopwords`: stopword corpora and the shared `StopwordSet`.
//! * `stemmer`: the `Stemmer` capability and its Snowball implementation.
//! * `dataset`: the in-memory `Dataset` and its CSV reader.
//! * `pipeline`: `CleaningPipeline` and its two variants.
//! * `sink`: CSV output and the token-list cell format.
//! * `headless`: one-call wrappers.
//!
//! ## Usage Example
//!
//! ```rust
//! use cleantext_core::{CleanConfig, CleaningPipeline, PipelineVariant};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = CleanConfig::load_default_rules()?;
//!     let pipeline = CleaningPipeline::from_config(&config, PipelineVariant::CleanAndStem)?;
//!
//!     let tokens = pipeline.clean_text("Dear team, the runners <b>are</b> running late!");
//!     assert_eq!(tokens, vec!["team", "runner", "run", "late"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible library operations return [`CleanTextError`]. Configuration
//! loading returns `anyhow::Result` so parse failures carry context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod dataset;
pub mod errors;
pub mod headless;
pub mod normalizer;
pub mod pipeline;
pub mod redactor;
pub mod sanitizers;
pub mod sink;
pub mod stemmer;
pub mod stopwords;

/// Re-exports the public configuration types and functions.
pub use config::{
    merge_rules, CellPolicy, CleanConfig, RedactionRule, StopwordConfig, MAX_PATTERN_LENGTH,
};

pub use errors::CleanTextError;

pub use dataset::{Cell, Dataset};
pub use normalizer::normalize;
pub use pipeline::{CleaningPipeline, PipelineReport, PipelineVariant};
pub use redactor::{RedactionSummaryItem, RedactionTally, Redactor};
pub use sink::{parse_token_list, render_token_list, CsvSink, DEFAULT_OUTPUT_FILE};
pub use stemmer::{SnowballStemmer, Stemmer};
pub use stopwords::{EmbeddedCorpus, FileCorpus, StopwordCorpus, StopwordSet, DOMAIN_STOPWORDS};

/// Re-exports the one-shot entry points.
pub use headless::{headless_clean, stop_and_stem, stop_clean};

pub use sanitizers::compiler::{compile_rules, CompiledRule, CompiledRules};
