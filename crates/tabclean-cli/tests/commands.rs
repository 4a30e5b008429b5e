//! Integration tests for the subcommands.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use polars::prelude::DataType;
use tempfile::TempDir;

use tabclean_cli::cli::{
    Cli, Command, ImputeArgs, MissingArgs, NormalizeArgs, OutliersArgs, SummaryArgs,
};
use tabclean_cli::commands::{run_impute, run_missing, run_normalize, run_outliers, run_summary};
use tabclean_clean::CleanError;

const SURVEY: &str = "\
id,age,income,city
1,23,45.0,Lyon
2,35,52.5,
3,NA,48.0,Lyon
4,41,,Nice
5,29,950.0,Nice
6,38,55.0,Lyon
";

fn fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.csv");
    fs::write(&path, SURVEY).unwrap();
    (dir, path)
}

fn impute_args(input: &Path, strategy: &str, output: Option<PathBuf>) -> ImputeArgs {
    ImputeArgs {
        input: input.to_path_buf(),
        strategy: strategy.to_string(),
        columns: None,
        output,
    }
}

#[test]
fn missing_reports_columns_with_nulls() {
    let (_dir, path) = fixture();
    let report = run_missing(&MissingArgs {
        input: path,
        json: false,
    })
    .unwrap();

    assert_eq!(report.total_rows, 6);
    let columns: Vec<&str> = report.entries.iter().map(|e| e.column.as_str()).collect();
    assert_eq!(columns, vec!["age", "income", "city"]);
}

#[test]
fn impute_mean_writes_filled_csv() {
    let (dir, path) = fixture();
    let output = dir.path().join("filled.csv");
    let args = ImputeArgs {
        columns: Some(vec!["age".to_string()]),
        ..impute_args(&path, "mean", Some(output.clone()))
    };

    let result = run_impute(&args).unwrap();

    assert_eq!(result.written.as_deref(), Some(output.as_path()));
    assert_eq!(result.table.column("age").unwrap().null_count(), 0);
    assert_eq!(result.table.column("age").unwrap().dtype(), &DataType::Float64);
    // Not selected, so still missing.
    assert_eq!(result.table.column("income").unwrap().null_count(), 1);

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("id,age,income,city\n"));
    assert_eq!(written.lines().count(), 7);
}

#[test]
fn impute_drop_without_output_keeps_complete_rows() {
    let (_dir, path) = fixture();
    let result = run_impute(&impute_args(&path, "drop", None)).unwrap();

    assert_eq!(result.rows_before, 6);
    assert_eq!(result.table.height(), 3);
    assert!(result.written.is_none());
}

#[test]
fn unknown_strategy_writes_nothing() {
    let (dir, path) = fixture();
    let output = dir.path().join("never.csv");

    let err = run_impute(&impute_args(&path, "bogus", Some(output.clone()))).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CleanError>(),
        Some(CleanError::Configuration { .. })
    ));
    insta::assert_snapshot!(
        format!("{err:#}"),
        @"unknown missing-value strategy 'bogus' (expected one of: drop, mean, median, mode)"
    );
    assert!(!output.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), SURVEY);
}

#[test]
fn unknown_method_is_rejected_before_loading() {
    let args = NormalizeArgs {
        input: PathBuf::from("/no/such/file.csv"),
        columns: vec!["age".to_string()],
        method: "bogus".to_string(),
        output: None,
    };
    let err = run_normalize(&args).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"unknown normalization method 'bogus' (expected one of: minmax, zscore)"
    );
}

#[test]
fn missing_input_file_is_reported() {
    let err = run_summary(&SummaryArgs {
        input: PathBuf::from("/no/such/file.csv"),
        json: false,
    })
    .unwrap_err();
    insta::assert_snapshot!(
        format!("{err:#}"),
        @"load /no/such/file.csv: file not found: /no/such/file.csv"
    );
}

#[test]
fn outliers_drop_removes_flagged_rows() {
    let (dir, path) = fixture();
    let output = dir.path().join("inliers.csv");
    let args = OutliersArgs {
        input: path,
        column: "income".to_string(),
        method: "iqr".to_string(),
        threshold: 1.5,
        drop: true,
        output: Some(output.clone()),
    };

    let result = run_outliers(&args).unwrap();

    assert_eq!(result.detection.count, 1);
    assert_eq!(result.rows_removed, 1);
    assert_eq!(result.table.height(), 5);
    // The null income row is kept: nulls are never outliers.
    assert_eq!(result.table.column("income").unwrap().null_count(), 1);
    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 6);
}

#[test]
fn outliers_on_missing_column_fails() {
    let (_dir, path) = fixture();
    let args = OutliersArgs {
        input: path,
        column: "salary".to_string(),
        method: "zscore".to_string(),
        threshold: 3.0,
        drop: false,
        output: None,
    };
    let err = run_outliers(&args).unwrap_err();
    assert!(format!("{err:#}").contains("Column not found: salary"));
}

#[test]
fn normalize_rescales_selected_columns() {
    let (_dir, path) = fixture();
    let args = NormalizeArgs {
        input: path,
        columns: vec!["id".to_string(), "city".to_string()],
        method: "minmax".to_string(),
        output: None,
    };

    let result = run_normalize(&args).unwrap();

    let ids: Vec<Option<f64>> = result.table.column("id").unwrap().f64().unwrap().iter().collect();
    assert_eq!(ids.first().copied().flatten(), Some(0.0));
    assert_eq!(ids.last().copied().flatten(), Some(1.0));
    // Strings are skipped, not rejected.
    assert_eq!(result.table.column("city").unwrap().dtype(), &DataType::String);
}

#[test]
fn summary_covers_numeric_columns_only() {
    let (_dir, path) = fixture();
    let summary = run_summary(&SummaryArgs {
        input: path,
        json: true,
    })
    .unwrap();

    let names: Vec<&str> = summary.columns.iter().map(|c| c.column.as_str()).collect();
    assert_eq!(names, vec!["id", "age", "income"]);
    assert_eq!(summary.get("age").unwrap().count, 5);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["columns"][0]["column"], "id");
}

#[test]
fn cli_parses_comma_separated_columns() {
    let cli = Cli::try_parse_from([
        "tabclean",
        "normalize",
        "data.csv",
        "--columns",
        "age,income",
        "--method",
        "zscore",
    ])
    .unwrap();

    let Command::Normalize(args) = cli.command else {
        panic!("expected normalize command");
    };
    assert_eq!(args.columns, vec!["age", "income"]);
    assert_eq!(args.method, "zscore");
}

#[test]
fn cli_applies_outlier_defaults() {
    let cli = Cli::try_parse_from(["tabclean", "outliers", "data.csv", "--column", "x"]).unwrap();

    let Command::Outliers(args) = cli.command else {
        panic!("expected outliers command");
    };
    assert_eq!(args.method, "iqr");
    assert_eq!(args.threshold, 1.5);
    assert!(!args.drop);
}

#[test]
fn cli_requires_strategy_for_impute() {
    assert!(Cli::try_parse_from(["tabclean", "impute", "data.csv"]).is_err());
}
