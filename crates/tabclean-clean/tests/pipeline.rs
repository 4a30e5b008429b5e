//! Operations composed the way a cleaning session uses them.

use polars::prelude::*;
use tabclean_clean::{
    CleanError, DEFAULT_THRESHOLD, MissingStrategy, NormalizationMethod, OutlierMethod,
    check_missing_values, detect_outliers, get_summary_statistics, handle_missing_values,
    normalize_data,
};

fn survey() -> DataFrame {
    df! {
        "age" => &[Some(23i64), Some(35), None, Some(41), Some(29), Some(38)],
        "income" => &[Some(45.0), Some(52.5), Some(48.0), None, Some(950.0), Some(55.0)],
        "city" => &[Some("Lyon"), None, Some("Lyon"), Some("Nice"), Some("Nice"), Some("Lyon")],
    }
    .unwrap()
}

#[test]
fn impute_then_detect_then_normalize() {
    let df = survey();

    let report = check_missing_values(&df);
    assert_eq!(report.entries.len(), 3);

    let filled = handle_missing_values(&df, MissingStrategy::Median, None).unwrap();
    assert_eq!(filled.column("age").unwrap().null_count(), 0);
    assert_eq!(filled.column("income").unwrap().null_count(), 0);
    // Median leaves strings alone; mode handles them.
    assert_eq!(filled.column("city").unwrap().null_count(), 1);
    let filled = handle_missing_values(&filled, MissingStrategy::Mode, None).unwrap();
    assert!(check_missing_values(&filled).is_empty());

    let detection =
        detect_outliers(&filled, "income", OutlierMethod::Iqr, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(detection.outlier_rows(), vec![4]);

    let trimmed = filled.filter(&detection.inlier_mask()).unwrap();
    assert_eq!(trimmed.height(), 5);

    let columns = vec!["age".to_string(), "income".to_string()];
    let normalized = normalize_data(&trimmed, &columns, NormalizationMethod::MinMax).unwrap();
    for name in &columns {
        let values = normalized.column(name).unwrap().f64().unwrap();
        assert_eq!(values.min(), Some(0.0));
        assert_eq!(values.max(), Some(1.0));
    }

    let summary = get_summary_statistics(&normalized).unwrap();
    assert_eq!(summary.columns.len(), 2);
    assert_eq!(summary.get("age").unwrap().count, 5);
}

#[test]
fn fills_do_not_depend_on_column_order() {
    let df = survey();
    let forward = vec!["age".to_string(), "income".to_string()];
    let backward = vec!["income".to_string(), "age".to_string()];
    for strategy in MissingStrategy::ALL {
        let a = handle_missing_values(&df, strategy, Some(&forward)).unwrap();
        let b = handle_missing_values(&df, strategy, Some(&backward)).unwrap();
        assert!(a.equals_missing(&b), "{strategy} depends on column order");
    }
}

#[test]
fn unknown_tag_never_reaches_the_table() {
    let df = survey();
    let before = df.clone();

    let result = "bogus"
        .parse::<MissingStrategy>()
        .and_then(|strategy| handle_missing_values(&df, strategy, None));

    assert!(matches!(result, Err(CleanError::Configuration { .. })));
    assert!(df.equals_missing(&before));
}

#[test]
fn detection_mask_tracks_prior_row_removal() {
    let df = survey();
    let dropped = handle_missing_values(&df, MissingStrategy::Drop, None).unwrap();
    assert_eq!(dropped.height(), 3);

    let detection = detect_outliers(&dropped, "income", OutlierMethod::ZScore, 1.0).unwrap();
    assert_eq!(detection.mask.len(), dropped.height());
    assert!(dropped.filter(&detection.inlier_mask()).is_ok());
}
