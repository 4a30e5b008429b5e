//! Moment helpers shared by the cleaning operations.

/// Squared-deviation sums below this are treated as exact zeros.
const ROUNDING_EPSILON: f64 = 1e-14;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn zero_rounding_error(value: f64) -> f64 {
    if value.abs() < ROUNDING_EPSILON {
        0.0
    } else {
        value
    }
}

/// Adjusted Fisher-Pearson skewness (G1).
///
/// NaN for fewer than three values, zero when all values are equal.
pub(crate) fn skewness(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.len() < 3 {
        return f64::NAN;
    }
    let center = mean(values);
    let (m2, m3) = values.iter().fold((0.0, 0.0), |(m2, m3), v| {
        let d = v - center;
        (m2 + d * d, m3 + d * d * d)
    });
    let m2 = zero_rounding_error(m2);
    if m2 == 0.0 {
        return 0.0;
    }
    (n * (n - 1.0).sqrt() / (n - 2.0)) * (m3 / m2.powf(1.5))
}

/// Bias-adjusted excess kurtosis (G2).
///
/// NaN for fewer than four values, zero when all values are equal.
pub(crate) fn excess_kurtosis(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.len() < 4 {
        return f64::NAN;
    }
    let center = mean(values);
    let (m2, m4) = values.iter().fold((0.0, 0.0), |(m2, m4), v| {
        let d2 = (v - center) * (v - center);
        (m2 + d2, m4 + d2 * d2)
    });
    let numerator = zero_rounding_error(n * (n + 1.0) * (n - 1.0) * m4);
    let denominator = zero_rounding_error((n - 2.0) * (n - 3.0) * m2 * m2);
    if denominator == 0.0 {
        return 0.0;
    }
    let adjustment = 3.0 * (n - 1.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0));
    numerator / denominator - adjustment
}
