//! CSV reading utilities.

mod options;
mod reader;

pub use options::{DEFAULT_INFER_SCHEMA_LENGTH, DEFAULT_NULL_VALUES, LoadOptions};
pub use reader::{load_data, load_data_with_options, validate_encoding};
