//! Strategy and method selectors.
//!
//! Each operation's behaviour is picked by a closed enum. Tags coming from
//! untyped sources (command-line flags, config strings) go through
//! [`std::str::FromStr`], which is the one place an unknown tag can surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CleanError, Result};

/// The kind of selector a tag was parsed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    MissingStrategy,
    OutlierMethod,
    NormalizationMethod,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingStrategy => "missing-value strategy",
            Self::OutlierMethod => "outlier method",
            Self::NormalizationMethod => "normalization method",
        })
    }
}

/// Looks up `raw` among `(tag, variant)` pairs, ignoring case and padding.
fn parse_tag<T: Copy>(raw: &str, table: &[(&str, T)], selector: SelectorKind) -> Result<T> {
    let wanted = raw.trim();
    table
        .iter()
        .find(|(tag, _)| tag.eq_ignore_ascii_case(wanted))
        .map(|(_, variant)| *variant)
        .ok_or_else(|| CleanError::Configuration {
            selector,
            tag: raw.to_string(),
            expected: table
                .iter()
                .map(|(tag, _)| *tag)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// How missing values are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MissingStrategy {
    /// Remove rows with a null in any selected column.
    #[default]
    Drop,
    /// Fill numeric nulls with the column mean.
    Mean,
    /// Fill numeric nulls with the column median.
    Median,
    /// Fill nulls with the most frequent value.
    Mode,
}

impl MissingStrategy {
    pub const ALL: [Self; 4] = [Self::Drop, Self::Mean, Self::Median, Self::Mode];

    const TAGS: [(&'static str, Self); 4] = [
        ("drop", Self::Drop),
        ("mean", Self::Mean),
        ("median", Self::Median),
        ("mode", Self::Mode),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
        }
    }

    /// Whether the strategy only applies to numeric columns.
    pub fn requires_numeric(self) -> bool {
        matches!(self, Self::Mean | Self::Median)
    }
}

impl FromStr for MissingStrategy {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self> {
        parse_tag(s, &Self::TAGS, SelectorKind::MissingStrategy)
    }
}

impl TryFrom<String> for MissingStrategy {
    type Error = CleanError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for MissingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outlier detection rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutlierMethod {
    /// Tukey fences around the interquartile range.
    #[default]
    Iqr,
    /// Distance from the mean in sample standard deviations.
    ZScore,
}

impl OutlierMethod {
    pub const ALL: [Self; 2] = [Self::Iqr, Self::ZScore];

    const TAGS: [(&'static str, Self); 2] = [("iqr", Self::Iqr), ("zscore", Self::ZScore)];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iqr => "iqr",
            Self::ZScore => "zscore",
        }
    }
}

impl FromStr for OutlierMethod {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self> {
        parse_tag(s, &Self::TAGS, SelectorKind::OutlierMethod)
    }
}

impl TryFrom<String> for OutlierMethod {
    type Error = CleanError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rescaling rule for numeric columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NormalizationMethod {
    /// Map the column's range onto [0, 1].
    #[default]
    MinMax,
    /// Center on the mean and divide by the sample standard deviation.
    ZScore,
}

impl NormalizationMethod {
    pub const ALL: [Self; 2] = [Self::MinMax, Self::ZScore];

    const TAGS: [(&'static str, Self); 2] = [("minmax", Self::MinMax), ("zscore", Self::ZScore)];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MinMax => "minmax",
            Self::ZScore => "zscore",
        }
    }
}

impl FromStr for NormalizationMethod {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self> {
        parse_tag(s, &Self::TAGS, SelectorKind::NormalizationMethod)
    }
}

impl TryFrom<String> for NormalizationMethod {
    type Error = CleanError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
