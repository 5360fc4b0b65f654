//! Error types for table construction, style catalogs and snapshots.
//!
//! Rendering itself never fails: short rows, missing headings, tiny column
//! widths and unknown style names are all normalized silently. Errors are
//! reserved for API misuse and for data coming from outside the process.

use std::fmt;
use std::path::PathBuf;

/// Errors returned by [`crate::table::Table`] and [`crate::style::StyleCatalog`].
#[derive(Debug)]
pub enum TableError {
    /// A style catalog file could not be read.
    Io {
        path: PathBuf,
        err: std::io::Error,
    },
    /// A snapshot or style catalog was not valid JSON for its schema.
    Json(serde_json::Error),
    /// `set_cell` addressed a row that does not exist (1-based).
    RowOutOfRange { row: usize, rows: usize },
    /// `set_cell` addressed a column past [`crate::table::MAX_COLUMNS`].
    ColumnOutOfRange { col: usize, max: usize },
    /// A custom border style failed validation.
    InvalidStyle { name: String, reason: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, err } => {
                write!(f, "failed to read style catalog {}: {err}", path.display())
            }
            Self::Json(err) => write!(f, "invalid table JSON: {err}"),
            Self::RowOutOfRange { row, rows } => {
                write!(f, "row {row} is out of range (table has {rows} rows)")
            }
            Self::ColumnOutOfRange { col, max } => {
                write!(f, "column {col} is out of range (at most {max} columns)")
            }
            Self::InvalidStyle { name, reason } => {
                write!(f, "invalid border style {name:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { err, .. } => Some(err),
            Self::Json(err) => Some(err),
            Self::RowOutOfRange { .. }
            | Self::ColumnOutOfRange { .. }
            | Self::InvalidStyle { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;
