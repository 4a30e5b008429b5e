//! Cleaning operations over Polars DataFrames.
//!
//! Every operation takes the table by reference and returns a new value; the
//! input is never modified. Strategies are chosen with the closed enums in
//! [`selector`], parsed from text through `FromStr`.
//!
//! # Example
//!
//! ```ignore
//! use tabclean_clean::{MissingStrategy, handle_missing_values, check_missing_values};
//!
//! let report = check_missing_values(&df);
//! let strategy: MissingStrategy = "median".parse()?;
//! let filled = handle_missing_values(&df, strategy, None)?;
//! ```

mod column;
mod error;
mod missing;
mod normalize;
mod outliers;
pub mod selector;
mod stats;
mod summary;

// === Error Types ===
pub use error::{CleanError, Result};

// === Selectors ===
pub use selector::{MissingStrategy, NormalizationMethod, OutlierMethod, SelectorKind};

// === Column Helpers ===
pub use column::{is_numeric_column, numeric_column_names};

// === Operations ===
pub use missing::{MissingEntry, MissingReport, check_missing_values, handle_missing_values};
pub use normalize::normalize_data;
pub use outliers::{DEFAULT_THRESHOLD, OutlierBounds, OutlierDetection, detect_outliers};
pub use summary::{ColumnSummary, STATISTIC_LABELS, SummaryStatistics, get_summary_statistics};
