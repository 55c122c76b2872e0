//! CSV output of a cleaned dataset.
//!
//! Token cells are written as a bracketed list of single-quoted tokens,
//! `['visit', 'email']`, with `'` and `\` inside a token backslash-escaped.
//! An empty list is `[]`. [`parse_token_list`] reads that form back.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::errors::CleanTextError;

/// File name used when the caller does not choose one.
pub const DEFAULT_OUTPUT_FILE: &str = "clean.csv";

/// Renders tokens in the list form described in the module docs.
pub fn render_token_list<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::from("[");
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        for c in token.as_ref().chars() {
            if c == '\'' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('\'');
    }
    out.push(']');
    out
}

/// Parses the output of [`render_token_list`]. Returns `None` on malformed input.
pub fn parse_token_list(text: &str) -> Option<Vec<String>> {
    let inner = text.trim().strip_prefix('[')?.strip_suffix(']')?;
    let mut tokens = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            None => break,
            Some('\'') => {}
            Some(_) => return None,
        }

        let mut token = String::new();
        loop {
            match chars.next()? {
                '\\' => token.push(chars.next()?),
                '\'' => break,
                c => token.push(c),
            }
        }
        tokens.push(token);

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            None => break,
            Some(',') => {}
            Some(_) => return None,
        }
    }
    Some(tokens)
}

/// Writes a dataset to a delimited file, replacing whatever was there.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
    delimiter: u8,
}

impl Default for CsvSink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the header row and every row in order, UTF-8 encoded.
    ///
    /// On failure the file may exist with partial content.
    pub fn write(&self, dataset: &Dataset) -> Result<(), CleanTextError> {
        info!("Writing {} rows to {}", dataset.len(), self.path.display());
        let sink_error = |source: csv::Error| CleanTextError::SinkWriteError {
            path: self.path.clone(),
            source,
        };

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(&self.path)
            .map_err(sink_error)?;

        let width = dataset.headers.len();
        writer.write_record(&dataset.headers).map_err(sink_error)?;
        for row in &dataset.rows {
            let fields = (0..width).map(|i| {
                row.get(i)
                    .map(|cell| cell.to_string())
                    .unwrap_or_default()
            });
            writer.write_record(fields).map_err(sink_error)?;
        }
        writer.flush().map_err(|e| sink_error(e.into()))?;

        debug!("Finished writing {}", self.path.display());
        Ok(())
    }
}
