//! CSV file reading into Polars DataFrames.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::options::LoadOptions;

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported. An empty file is
/// rejected here because there is no header row to read.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::from_io(path, e))?;

    if bytes_read == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    if bytes_read >= 2 {
        // UTF-16 LE BOM
        if buffer[..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if buffer[..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (the CSV reader skips it)
    Ok(())
}

/// Loads a comma-separated file with a header row using default options.
pub fn load_data(path: &Path) -> Result<DataFrame> {
    load_data_with_options(path, &LoadOptions::default())
}

/// Loads a delimited file with a header row.
///
/// A missing file is reported as [`IngestError::FileNotFound`]; every other
/// failure keeps its underlying cause. Nothing is retried.
pub fn load_data_with_options(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    validate_encoding(path)?;

    let null_values: Vec<PlSmallStr> = options
        .null_values
        .iter()
        .map(|value| PlSmallStr::from(value.as_str()))
        .collect();
    let delimiter = options.delimiter;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length)
        .map_parse_options(|parse| {
            parse
                .with_separator(delimiter)
                .with_null_values(Some(NullValues::AllColumns(null_values.clone())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "data loaded"
    );

    Ok(df)
}
