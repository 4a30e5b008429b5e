//! CLI argument definitions for tabclean.
//!
//! Strategy and method tags are taken as plain strings and parsed by the
//! command, so an unknown tag is reported the same way the library reports
//! it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabclean",
    version,
    about = "Inspect and clean tabular data",
    long_about = "Inspect and clean CSV tables.\n\n\
                  Reports missing values, fills or drops them, flags outliers,\n\
                  rescales numeric columns and prints descriptive statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report null counts per column.
    Missing(MissingArgs),

    /// Drop or fill missing values.
    Impute(ImputeArgs),

    /// Flag outliers in a numeric column.
    Outliers(OutliersArgs),

    /// Rescale numeric columns.
    Normalize(NormalizeArgs),

    /// Print descriptive statistics for numeric columns.
    Summary(SummaryArgs),

    /// List every strategy and method tag.
    Methods,
}

#[derive(Args, Debug, Clone)]
pub struct MissingArgs {
    /// CSV file with a header row.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ImputeArgs {
    /// CSV file with a header row.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// How to handle missing values: drop, mean, median or mode.
    #[arg(long = "strategy", value_name = "TAG")]
    pub strategy: String,

    /// Columns to consider (default: all columns).
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Write the result to this CSV file instead of printing a preview.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct OutliersArgs {
    /// CSV file with a header row.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Numeric column to inspect.
    #[arg(long = "column", value_name = "NAME")]
    pub column: String,

    /// Detection method: iqr or zscore.
    #[arg(long = "method", value_name = "TAG", default_value = "iqr")]
    pub method: String,

    /// IQR multiplier or z-score cut-off.
    #[arg(long = "threshold", default_value_t = tabclean_clean::DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Keep only the rows that are not outliers.
    #[arg(long = "drop")]
    pub drop: bool,

    /// Write the resulting table to this CSV file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// CSV file with a header row.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Columns to rescale.
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',', required = true)]
    pub columns: Vec<String>,

    /// Rescaling method: minmax or zscore.
    #[arg(long = "method", value_name = "TAG", default_value = "minmax")]
    pub method: String,

    /// Write the result to this CSV file instead of printing a preview.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// CSV file with a header row.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Print the statistics as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
