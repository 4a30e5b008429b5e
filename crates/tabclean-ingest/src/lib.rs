//! Table loading for tabclean.
//!
//! This crate turns delimited text files into Polars DataFrames. It is the
//! only place that touches the file system on the read path.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabclean_ingest::{IngestError, load_data};
//!
//! match load_data(Path::new("data/survey.csv")) {
//!     Ok(df) => println!("{} rows", df.height()),
//!     Err(err) if err.is_not_found() => eprintln!("no such file"),
//!     Err(err) => eprintln!("load failed: {err}"),
//! }
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    DEFAULT_INFER_SCHEMA_LENGTH, DEFAULT_NULL_VALUES, LoadOptions, load_data,
    load_data_with_options, validate_encoding,
};
