//! In-memory tabular dataset: named columns, ordered rows.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::errors::CleanTextError;

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Absent value (an empty CSV field).
    Missing,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Cleaned output of the pipeline.
    Tokens(Vec<String>),
}

/// Stand-in for cells absent from a short row.
pub(crate) static MISSING: Cell = Cell::Missing;

impl Cell {
    /// Short type name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Missing => "missing",
            Cell::Text(_) => "text",
            Cell::Number(_) => "number",
            Cell::Bool(_) => "bool",
            Cell::Tokens(_) => "token list",
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Missing, Into::into)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Text(text) => f.write_str(text),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Tokens(tokens) => f.write_str(&crate::sink::render_token_list(tokens)),
        }
    }
}

/// Ordered rows sharing one header.
///
/// Rows shorter than the header are padded with [`Cell::Missing`] on load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::Missing);
        self.rows.push(row);
    }

    /// Position of the column called `name`.
    pub fn column_index(&self, name: &str) -> Result<usize, CleanTextError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CleanTextError::ColumnNotFound(name.to_string()))
    }

    /// Cells of one column, top to bottom. Short rows yield [`Cell::Missing`].
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Cell>, CleanTextError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| row.get(idx).unwrap_or(&MISSING)))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reads a headed CSV stream. Every non-empty field becomes [`Cell::Text`].
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CleanTextError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut dataset = Dataset::new(headers);

        for record in csv_reader.records() {
            let record = record?;
            let row = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Missing
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect();
            dataset.push_row(row);
        }

        debug!(
            "Read dataset with {} columns and {} rows.",
            dataset.headers.len(),
            dataset.len()
        );
        Ok(dataset)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CleanTextError> {
        let path = path.as_ref();
        info!("Loading dataset from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(std::io::BufReader::new(file))
    }
}
