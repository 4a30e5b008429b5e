//! Subcommand implementations.
//!
//! Each command parses its tags before the input file is read, so a bad tag
//! never loads, changes or writes anything.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use tabclean_clean::{
    MissingReport, MissingStrategy, NormalizationMethod, OutlierDetection, OutlierMethod,
    SummaryStatistics, check_missing_values, detect_outliers, get_summary_statistics,
    handle_missing_values, normalize_data,
};
use tabclean_ingest::load_data;

use crate::cli::{ImputeArgs, MissingArgs, NormalizeArgs, OutliersArgs, SummaryArgs};
use crate::output::write_csv;

/// A transformed table and where it was written, if anywhere.
#[derive(Debug)]
pub struct TableResult {
    pub table: DataFrame,
    pub rows_before: usize,
    pub written: Option<PathBuf>,
}

#[derive(Debug)]
pub struct OutlierResult {
    pub detection: OutlierDetection,
    /// Input table, or only its inliers when `--drop` was given.
    pub table: DataFrame,
    pub rows_removed: usize,
    pub written: Option<PathBuf>,
}

fn load(input: &Path) -> Result<DataFrame> {
    let df = load_data(input).with_context(|| format!("load {}", input.display()))?;
    info!("loaded {} rows, {} columns", df.height(), df.width());
    Ok(df)
}

fn finish(mut table: DataFrame, rows_before: usize, output: Option<&Path>) -> Result<TableResult> {
    if let Some(path) = output {
        write_csv(&mut table, path)?;
    }
    Ok(TableResult {
        table,
        rows_before,
        written: output.map(Path::to_path_buf),
    })
}

pub fn run_missing(args: &MissingArgs) -> Result<MissingReport> {
    let _guard = info_span!("missing", input = %args.input.display()).entered();
    let df = load(&args.input)?;
    let report = check_missing_values(&df);
    info!(
        columns = report.entries.len(),
        cells = report.total_missing(),
        "missing values counted"
    );
    Ok(report)
}

pub fn run_impute(args: &ImputeArgs) -> Result<TableResult> {
    let _guard = info_span!("impute", input = %args.input.display()).entered();
    let strategy: MissingStrategy = args.strategy.parse()?;
    let df = load(&args.input)?;
    let result = handle_missing_values(&df, strategy, args.columns.as_deref())
        .with_context(|| format!("{strategy} strategy"))?;
    info!(
        strategy = %strategy,
        rows_before = df.height(),
        rows_after = result.height(),
        "missing values handled"
    );
    finish(result, df.height(), args.output.as_deref())
}

pub fn run_outliers(args: &OutliersArgs) -> Result<OutlierResult> {
    let _guard = info_span!("outliers", input = %args.input.display()).entered();
    let method: OutlierMethod = args.method.parse()?;
    let df = load(&args.input)?;
    let detection = detect_outliers(&df, &args.column, method, args.threshold)
        .with_context(|| format!("{method} outlier detection"))?;

    let mut table = if args.drop {
        df.filter(&detection.inlier_mask())
            .context("remove outlier rows")?
    } else {
        df
    };
    let rows_removed = if args.drop { detection.count } else { 0 };
    if let Some(path) = &args.output {
        write_csv(&mut table, path)?;
    }
    Ok(OutlierResult {
        detection,
        table,
        rows_removed,
        written: args.output.clone(),
    })
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<TableResult> {
    let _guard = info_span!("normalize", input = %args.input.display()).entered();
    let method: NormalizationMethod = args.method.parse()?;
    let df = load(&args.input)?;
    let result = normalize_data(&df, &args.columns, method)
        .with_context(|| format!("{method} normalization"))?;
    finish(result, df.height(), args.output.as_deref())
}

pub fn run_summary(args: &SummaryArgs) -> Result<SummaryStatistics> {
    let _guard = info_span!("summary", input = %args.input.display()).entered();
    let df = load(&args.input)?;
    let summary = get_summary_statistics(&df).context("summary statistics")?;
    info!(columns = summary.columns.len(), "summary computed");
    Ok(summary)
}
