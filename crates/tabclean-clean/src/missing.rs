//! Missing-value reporting and handling.

use polars::prelude::*;
use serde::Serialize;

use crate::column::{is_numeric_column, numeric_values, require_column, resolve_columns};
use crate::error::Result;
use crate::selector::MissingStrategy;

/// Null count for a single column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingEntry {
    pub column: String,
    pub count: usize,
    /// Share of the table's rows, in percent.
    pub percentage: f64,
}

/// Columns that contain at least one null, in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingReport {
    pub total_rows: usize,
    pub entries: Vec<MissingEntry>,
}

impl MissingReport {
    /// True when no column has a null.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total null cells across all reported columns.
    pub fn total_missing(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn get(&self, column: &str) -> Option<&MissingEntry> {
        self.entries.iter().find(|entry| entry.column == column)
    }

    /// Tabular form with `column`, `missing_count` and `percentage` columns.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let names: Vec<&str> = self.entries.iter().map(|e| e.column.as_str()).collect();
        let counts: Vec<u64> = self.entries.iter().map(|e| e.count as u64).collect();
        let percentages: Vec<f64> = self.entries.iter().map(|e| e.percentage).collect();
        let df = DataFrame::new(vec![
            Series::new("column".into(), names).into(),
            Series::new("missing_count".into(), counts).into(),
            Series::new("percentage".into(), percentages).into(),
        ])?;
        Ok(df)
    }
}

/// Counts nulls per column.
///
/// Columns without nulls are left out. On a table with no rows every
/// percentage is 0.
pub fn check_missing_values(df: &DataFrame) -> MissingReport {
    let total_rows = df.height();
    let entries = df
        .get_columns()
        .iter()
        .filter_map(|column| {
            let count = column.null_count();
            if count == 0 {
                return None;
            }
            let percentage = if total_rows == 0 {
                0.0
            } else {
                count as f64 / total_rows as f64 * 100.0
            };
            Some(MissingEntry {
                column: column.name().to_string(),
                count,
                percentage,
            })
        })
        .collect();
    MissingReport {
        total_rows,
        entries,
    }
}

/// Applies `strategy` to the selected columns (`None` means all of them).
///
/// Every named column is checked before any work. Fill values come from each
/// column's own non-null values in `df`, which is never modified.
pub fn handle_missing_values(
    df: &DataFrame,
    strategy: MissingStrategy,
    columns: Option<&[String]>,
) -> Result<DataFrame> {
    let selected = resolve_columns(df, columns)?;

    let result = match strategy {
        MissingStrategy::Drop => drop_missing_rows(df, &selected)?,
        MissingStrategy::Mean | MissingStrategy::Median | MissingStrategy::Mode => {
            let mut exprs = Vec::with_capacity(selected.len());
            for name in &selected {
                if let Some(expr) = fill_expr(require_column(df, name)?, strategy)? {
                    exprs.push(expr);
                }
            }
            if exprs.is_empty() {
                df.clone()
            } else {
                df.clone().lazy().with_columns(exprs).collect()?
            }
        }
    };

    tracing::debug!(
        strategy = %strategy,
        columns = selected.len(),
        rows_before = df.height(),
        rows_after = result.height(),
        "missing values handled"
    );

    Ok(result)
}

fn drop_missing_rows(df: &DataFrame, selected: &[String]) -> Result<DataFrame> {
    let mut keep = BooleanChunked::full("keep".into(), true, df.height());
    for name in selected {
        let column = require_column(df, name)?;
        if column.null_count() > 0 {
            keep = &keep & &column.is_not_null();
        }
    }
    Ok(df.filter(&keep)?)
}

/// Builds the fill expression for one column, or `None` when the strategy
/// leaves it alone.
fn fill_expr(column: &Column, strategy: MissingStrategy) -> Result<Option<Expr>> {
    let name = column.name().as_str();
    if column.null_count() == 0 {
        return Ok(None);
    }
    if strategy.requires_numeric() && !is_numeric_column(column) {
        tracing::debug!(column = name, strategy = %strategy, "skipping non-numeric column");
        return Ok(None);
    }

    let expr = match strategy {
        MissingStrategy::Mean | MissingStrategy::Median => {
            let values = numeric_values(column)?;
            let fill = if strategy == MissingStrategy::Mean {
                values.mean()
            } else {
                values.median()
            };
            let filled = col(name).cast(DataType::Float64);
            match fill {
                Some(fill) => filled.fill_null(lit(fill)),
                None => filled,
            }
        }
        MissingStrategy::Mode => col(name).fill_null(mode_expr(name)),
        MissingStrategy::Drop => return Ok(None),
    };
    Ok(Some(expr))
}

/// Most frequent non-null value of a column in its own dtype; ties go to
/// the smallest value. Null when the column has no values.
fn mode_expr(name: &str) -> Expr {
    col(name)
        .drop_nulls()
        .mode()
        .sort(SortOptions::default())
        .first()
}
