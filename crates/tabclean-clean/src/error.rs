//! Error types for the cleaning operations.

use thiserror::Error;

use crate::selector::SelectorKind;

/// Errors that can occur while cleaning or describing a table.
///
/// Degenerate distributions (zero variance, zero range, a column with no
/// values to take a mode from) are not errors; each operation defines a
/// fallback for them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanError {
    /// A strategy or method tag that names no known variant.
    #[error("unknown {selector} '{tag}' (expected one of: {expected})")]
    Configuration {
        /// Which selector the tag was given for.
        selector: SelectorKind,
        /// The rejected tag, as supplied.
        tag: String,
        /// Comma-separated list of accepted tags.
        expected: String,
    },

    /// Column not found in the table.
    #[error("Column not found: {column}")]
    ColumnNotFound {
        /// The column name that was not found.
        column: String,
    },

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl CleanError {
    /// Returns true when the error comes from an unrecognized tag.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
