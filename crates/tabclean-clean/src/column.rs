//! Column lookup and numeric capability helpers.

use polars::prelude::*;

use crate::error::{CleanError, Result};

/// Whether a column supports numeric aggregation.
///
/// Integer and floating-point columns qualify; booleans, strings and
/// temporal columns do not.
pub fn is_numeric_column(column: &Column) -> bool {
    column.dtype().is_numeric()
}

/// Names of the numeric columns in table order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| is_numeric_column(column))
        .map(|column| column.name().to_string())
        .collect()
}

/// Looks up a column, mapping a miss to [`CleanError::ColumnNotFound`].
pub(crate) fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| CleanError::ColumnNotFound {
        column: name.to_string(),
    })
}

/// Resolves a column selection against a table.
///
/// `None` selects every column. Every named column must exist; duplicates
/// are dropped, keeping the first occurrence.
pub(crate) fn resolve_columns(df: &DataFrame, columns: Option<&[String]>) -> Result<Vec<String>> {
    let Some(columns) = columns else {
        return Ok(df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect());
    };
    let mut resolved: Vec<String> = Vec::with_capacity(columns.len());
    for name in columns {
        require_column(df, name)?;
        if !resolved.contains(name) {
            resolved.push(name.clone());
        }
    }
    Ok(resolved)
}

/// Casts a numeric column to `Float64`, keeping nulls.
pub(crate) fn numeric_values(column: &Column) -> Result<Float64Chunked> {
    let cast = column.cast(&DataType::Float64)?;
    Ok(cast.f64()?.clone())
}
