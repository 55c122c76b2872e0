//! errors.rs - Custom error types for the cleantext-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `cleantext-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanTextError {
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    #[error("Row {row}, column '{column}': expected text but found {found}")]
    InvalidCellType {
        row: usize,
        column: String,
        found: &'static str,
    },

    #[error("Failed to write output file {}: {source}", path.display())]
    SinkWriteError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to initialize {capability}: {reason}")]
    CapabilityInitError {
        capability: &'static str,
        reason: String,
    },

    #[error("Failed to read dataset: {0}")]
    DatasetReadError(#[from] csv::Error),

    #[error("Failed to compile redaction rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

impl CleanTextError {
    /// Shorthand for a capability that could not be brought up.
    pub fn capability(capability: &'static str, reason: impl Into<String>) -> Self {
        CleanTextError::CapabilityInitError {
            capability,
            reason: reason.into(),
        }
    }
}

/// Library-wide result alias.
pub type Result<T, E = CleanTextError> = std::result::Result<T, E>;
