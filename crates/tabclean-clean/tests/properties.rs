//! Property tests for the cleaning operations.

use polars::prelude::*;
use proptest::prelude::*;
use tabclean_clean::{
    MissingStrategy, NormalizationMethod, OutlierMethod, detect_outliers, get_summary_statistics,
    handle_missing_values, normalize_data,
};

fn arb_rows() -> impl Strategy<Value = Vec<(Option<i64>, Option<i64>)>> {
    prop::collection::vec(
        (
            prop::option::weighted(0.8, -100i64..100),
            prop::option::weighted(0.8, -100i64..100),
        ),
        0..40,
    )
}

fn build_frame(rows: &[(Option<i64>, Option<i64>)]) -> DataFrame {
    let a: Vec<Option<i64>> = rows.iter().map(|(a, _)| *a).collect();
    let b: Vec<Option<i64>> = rows.iter().map(|(_, b)| *b).collect();
    let ids: Vec<i64> = (0..rows.len() as i64).collect();
    df! { "id" => ids, "a" => a, "b" => b }.unwrap()
}

fn int_column(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name).unwrap().i64().unwrap().iter().collect()
}

proptest! {
    #[test]
    fn drop_removes_every_null_and_keeps_rows_intact(rows in arb_rows()) {
        let df = build_frame(&rows);
        let cleaned = handle_missing_values(&df, MissingStrategy::Drop, None).unwrap();

        prop_assert_eq!(cleaned.column("a").unwrap().null_count(), 0);
        prop_assert_eq!(cleaned.column("b").unwrap().null_count(), 0);

        let expected: Vec<(usize, Option<i64>, Option<i64>)> = rows
            .iter()
            .enumerate()
            .filter(|(_, (a, b))| a.is_some() && b.is_some())
            .map(|(id, (a, b))| (id, *a, *b))
            .collect();
        let ids = int_column(&cleaned, "id");
        let a = int_column(&cleaned, "a");
        let b = int_column(&cleaned, "b");
        let actual: Vec<(usize, Option<i64>, Option<i64>)> = ids
            .iter()
            .zip(a.iter().zip(b.iter()))
            .map(|(id, (a, b))| (id.unwrap() as usize, *a, *b))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn drop_on_selected_column_ignores_the_rest(rows in arb_rows()) {
        let df = build_frame(&rows);
        let selection = vec!["a".to_string()];
        let cleaned = handle_missing_values(&df, MissingStrategy::Drop, Some(&selection)).unwrap();

        let expected_rows = rows.iter().filter(|(a, _)| a.is_some()).count();
        prop_assert_eq!(cleaned.height(), expected_rows);
        prop_assert_eq!(cleaned.column("a").unwrap().null_count(), 0);
    }

    #[test]
    fn zscore_on_constant_column_flags_nothing(
        value in -1000i64..1000,
        len in 1usize..30,
        threshold in 0.5f64..5.0,
    ) {
        let df = df! { "x" => vec![value; len] }.unwrap();
        let detection = detect_outliers(&df, "x", OutlierMethod::ZScore, threshold).unwrap();

        prop_assert_eq!(detection.count, 0);
        prop_assert_eq!(detection.mask.len(), len);
        prop_assert!(detection.mask.iter().all(|flag| flag == Some(false)));
    }

    #[test]
    fn minmax_maps_range_onto_unit_interval(
        values in prop::collection::vec(prop::option::weighted(0.9, -1000i32..1000), 1..40),
    ) {
        let df = df! { "x" => values.clone() }.unwrap();
        let out = normalize_data(&df, &["x".to_string()], NormalizationMethod::MinMax).unwrap();
        let scaled: Vec<Option<f64>> = out.column("x").unwrap().f64().unwrap().iter().collect();

        // Nulls stay where they were.
        for (original, rescaled) in values.iter().zip(&scaled) {
            prop_assert_eq!(original.is_none(), rescaled.is_none());
        }

        let present: Vec<f64> = scaled.iter().flatten().copied().collect();
        prop_assert!(present.iter().all(|v| (0.0..=1.0).contains(v)));

        let observed: Vec<i32> = values.iter().flatten().copied().collect();
        let spread = match (observed.iter().min(), observed.iter().max()) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        };
        if spread > 0 {
            let low = present.iter().copied().fold(f64::INFINITY, f64::min);
            let high = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(low, 0.0);
            prop_assert_eq!(high, 1.0);
        } else {
            prop_assert!(present.iter().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn summary_of_single_value_never_fails(value in -1.0e6f64..1.0e6) {
        let df = df! { "x" => [value] }.unwrap();
        let summary = get_summary_statistics(&df).unwrap();
        let x = summary.get("x").unwrap();

        prop_assert_eq!(x.count, 1);
        prop_assert_eq!(x.mean, value);
        prop_assert_eq!(x.min, value);
        prop_assert_eq!(x.max, value);
        prop_assert!(x.std.is_nan());
        prop_assert!(x.skewness.is_nan());
        prop_assert!(x.kurtosis.is_nan());
    }
}
