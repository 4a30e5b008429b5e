//! Shared utilities for tabclean crates.
//!
//! This crate provides the Polars value helpers used when tables and
//! statistics are rendered for people rather than machines.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{any_to_string, format_numeric, format_statistic};
