//! Descriptive statistics for numeric columns.

use polars::prelude::*;
use serde::Serialize;

use crate::column::{is_numeric_column, numeric_values};
use crate::error::Result;
use crate::stats::{excess_kurtosis, skewness};

/// Row labels of [`SummaryStatistics::to_dataframe`], in order.
pub const STATISTIC_LABELS: [&str; 11] = [
    "count", "mean", "std", "min", "25%", "50%", "75%", "max", "variance", "skewness", "kurtosis",
];

/// Statistics over the non-null values of one column.
///
/// Values that need more observations than the column has are NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
    pub variance: f64,
    pub skewness: f64,
    /// Excess kurtosis.
    pub kurtosis: f64,
}

impl ColumnSummary {
    /// Values in [`STATISTIC_LABELS`] order, with the count as a float.
    pub fn statistics(&self) -> [f64; 11] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
            self.variance,
            self.skewness,
            self.kurtosis,
        ]
    }
}

/// Per-column summaries in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub columns: Vec<ColumnSummary>,
}

impl SummaryStatistics {
    pub fn get(&self, column: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|summary| summary.column == column)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Describe layout: a `statistic` label column followed by one `Float64`
    /// column per summarized column.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.columns.len() + 1);
        columns.push(Series::new("statistic".into(), STATISTIC_LABELS.to_vec()).into());
        for summary in &self.columns {
            let values = summary.statistics().to_vec();
            columns.push(Series::new(summary.column.as_str().into(), values).into());
        }
        Ok(DataFrame::new(columns)?)
    }
}

/// Summarizes every numeric column of `df`; booleans and strings are left out.
pub fn get_summary_statistics(df: &DataFrame) -> Result<SummaryStatistics> {
    let mut columns = Vec::new();
    for column in df.get_columns() {
        if !is_numeric_column(column) {
            continue;
        }
        columns.push(summarize_column(column)?);
    }
    Ok(SummaryStatistics { columns })
}

fn summarize_column(column: &Column) -> Result<ColumnSummary> {
    let values = numeric_values(column)?;
    let observed: Vec<f64> = values.iter().flatten().collect();
    let count = observed.len();

    let quantile = |q: f64| -> Result<f64> {
        Ok(values
            .quantile(q, QuantileMethod::Linear)?
            .unwrap_or(f64::NAN))
    };
    let (std, variance) = if count >= 2 {
        (
            values.std(1).unwrap_or(f64::NAN),
            values.var(1).unwrap_or(f64::NAN),
        )
    } else {
        (f64::NAN, f64::NAN)
    };

    Ok(ColumnSummary {
        column: column.name().to_string(),
        count,
        mean: values.mean().unwrap_or(f64::NAN),
        std,
        min: values.min().unwrap_or(f64::NAN),
        q25: quantile(0.25)?,
        q50: quantile(0.5)?,
        q75: quantile(0.75)?,
        max: values.max().unwrap_or(f64::NAN),
        variance,
        skewness: skewness(&observed),
        kurtosis: excess_kurtosis(&observed),
    })
}
