//! Column rescaling.

use polars::prelude::*;

use crate::column::{is_numeric_column, numeric_values, require_column, resolve_columns};
use crate::error::Result;
use crate::selector::NormalizationMethod;

/// Rescales the named columns, leaving every other column as it was.
///
/// All names are checked before any column is touched. Rescaled columns are
/// `Float64` and keep their nulls. A column with no spread becomes all zeros;
/// non-numeric columns are skipped with a warning.
pub fn normalize_data(
    df: &DataFrame,
    columns: &[String],
    method: NormalizationMethod,
) -> Result<DataFrame> {
    let selected = resolve_columns(df, Some(columns))?;

    let mut out = df.clone();
    for name in &selected {
        let source = require_column(df, name)?;
        if !is_numeric_column(source) {
            tracing::warn!(
                column = name.as_str(),
                dtype = %source.dtype(),
                "column is not numeric, skipping normalization"
            );
            continue;
        }
        let values = numeric_values(source)?;
        let scaled = rescale(&values, method).with_name(name.as_str().into());
        out.with_column(scaled.into_series())?;
    }

    tracing::debug!(method = %method, columns = selected.len(), "columns normalized");

    Ok(out)
}

fn rescale(values: &Float64Chunked, method: NormalizationMethod) -> Float64Chunked {
    if values.null_count() == values.len() {
        return values.clone();
    }
    let (center, scale) = match method {
        NormalizationMethod::MinMax => match (values.min(), values.max()) {
            (Some(min), Some(max)) => (min, max - min),
            _ => (0.0, 0.0),
        },
        NormalizationMethod::ZScore => match (values.mean(), values.std(1)) {
            (Some(mean), Some(std)) if std.is_finite() => (mean, std),
            _ => (0.0, 0.0),
        },
    };
    if scale == 0.0 {
        return values.iter().map(|value| value.map(|_| 0.0)).collect();
    }
    values
        .iter()
        .map(|value| value.map(|v| (v - center) / scale))
        .collect()
}
