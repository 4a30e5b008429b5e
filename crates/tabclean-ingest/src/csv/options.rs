//! Load options for delimited files.

/// Cell values read as missing unless the caller overrides them.
///
/// These are the NA markers most dataframe tools emit, so a file exported
/// elsewhere round-trips its missing cells as nulls.
pub const DEFAULT_NULL_VALUES: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

/// Rows sampled when inferring column types.
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 100;

/// Options controlling how a delimited file becomes a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field separator byte.
    pub delimiter: u8,
    /// Cell values treated as null in every column.
    pub null_values: Vec<String>,
    /// Number of rows used for type inference; `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_values: DEFAULT_NULL_VALUES
                .iter()
                .map(|value| (*value).to_string())
                .collect(),
            infer_schema_length: Some(DEFAULT_INFER_SCHEMA_LENGTH),
        }
    }
}

impl LoadOptions {
    /// Set the field separator.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the null tokens.
    #[must_use]
    pub fn with_null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set how many rows are sampled for type inference.
    #[must_use]
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }
}
