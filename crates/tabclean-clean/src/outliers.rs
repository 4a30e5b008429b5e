//! Outlier detection over a single numeric column.

use polars::prelude::*;
use serde::Serialize;

use crate::column::{is_numeric_column, numeric_values, require_column};
use crate::error::Result;
use crate::selector::OutlierMethod;

/// Fence multiplier for IQR and cut-off for z-scores when none is given.
pub const DEFAULT_THRESHOLD: f64 = 1.5;

/// Reference values an outlier decision was made against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutlierBounds {
    Iqr {
        q1: f64,
        q3: f64,
        iqr: f64,
        lower: f64,
        upper: f64,
    },
    ZScore {
        mean: f64,
        std: f64,
    },
    /// No spread to measure against; nothing is flagged.
    Degenerate,
}

/// Result of [`detect_outliers`].
#[derive(Debug, Clone)]
pub struct OutlierDetection {
    pub column: String,
    pub method: OutlierMethod,
    pub threshold: f64,
    pub bounds: OutlierBounds,
    /// One entry per table row; `true` marks an outlier.
    pub mask: BooleanChunked,
    pub count: usize,
}

impl OutlierDetection {
    /// Complement of [`Self::mask`], for keeping only inliers.
    pub fn inlier_mask(&self) -> BooleanChunked {
        !&self.mask
    }

    /// Row positions flagged as outliers.
    pub fn outlier_rows(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(row, flagged)| flagged.unwrap_or(false).then_some(row))
            .collect()
    }
}

/// Flags outliers in `column` with the given method.
///
/// Nulls are never flagged. A non-numeric column yields an all-false mask and
/// a warning rather than an error.
pub fn detect_outliers(
    df: &DataFrame,
    column: &str,
    method: OutlierMethod,
    threshold: f64,
) -> Result<OutlierDetection> {
    let source = require_column(df, column)?;

    let (bounds, flags) = if is_numeric_column(source) {
        let values = numeric_values(source)?;
        let bounds = compute_bounds(&values, method, threshold)?;
        let flags: Vec<bool> = values
            .iter()
            .map(|value| value.is_some_and(|v| is_outlier(v, &bounds, threshold)))
            .collect();
        (bounds, flags)
    } else {
        tracing::warn!(
            column,
            dtype = %source.dtype(),
            "column is not numeric, no outliers flagged"
        );
        (OutlierBounds::Degenerate, vec![false; df.height()])
    };

    let count = flags.iter().filter(|flag| **flag).count();
    let mask = BooleanChunked::from_slice(column.into(), &flags);

    tracing::info!("detected {count} outliers in column '{column}' using {method} method");

    Ok(OutlierDetection {
        column: column.to_string(),
        method,
        threshold,
        bounds,
        mask,
        count,
    })
}

fn compute_bounds(
    values: &Float64Chunked,
    method: OutlierMethod,
    threshold: f64,
) -> Result<OutlierBounds> {
    let bounds = match method {
        OutlierMethod::Iqr => {
            let q1 = values.quantile(0.25, QuantileMethod::Linear)?;
            let q3 = values.quantile(0.75, QuantileMethod::Linear)?;
            match (q1, q3) {
                (Some(q1), Some(q3)) => {
                    let iqr = q3 - q1;
                    OutlierBounds::Iqr {
                        q1,
                        q3,
                        iqr,
                        lower: q1 - threshold * iqr,
                        upper: q3 + threshold * iqr,
                    }
                }
                _ => OutlierBounds::Degenerate,
            }
        }
        OutlierMethod::ZScore => match (values.mean(), values.std(1)) {
            (Some(mean), Some(std)) if std > 0.0 && std.is_finite() => {
                OutlierBounds::ZScore { mean, std }
            }
            _ => OutlierBounds::Degenerate,
        },
    };
    Ok(bounds)
}

fn is_outlier(value: f64, bounds: &OutlierBounds, threshold: f64) -> bool {
    match *bounds {
        OutlierBounds::Iqr { lower, upper, .. } => value < lower || value > upper,
        OutlierBounds::ZScore { mean, std } => ((value - mean) / std).abs() > threshold,
        OutlierBounds::Degenerate => false,
    }
}
