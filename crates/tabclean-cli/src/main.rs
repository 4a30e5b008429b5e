//! tabclean command-line entry point.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use tabclean_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use tabclean_cli::commands::{
    TableResult, run_impute, run_missing, run_normalize, run_outliers, run_summary,
};
use tabclean_cli::logging::{LogConfig, LogFormat, init_logging};
use tabclean_cli::render::{
    methods_table, missing_table, outlier_table, preview_footer, preview_table, summary_table,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Missing(args) => {
            let report = run_missing(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.is_empty() {
                println!("No missing values in {} rows.", report.total_rows);
            } else {
                println!("{}", missing_table(&report));
                println!(
                    "{} missing cells across {} rows",
                    report.total_missing(),
                    report.total_rows
                );
            }
        }
        Command::Impute(args) => print_table_result(&run_impute(&args)?),
        Command::Outliers(args) => {
            let result = run_outliers(&args)?;
            println!("{}", outlier_table(&result.detection));
            if args.drop {
                println!(
                    "removed {} rows, {} remain",
                    result.rows_removed,
                    result.table.height()
                );
            }
            if let Some(path) = &result.written {
                println!("wrote {} rows to {}", result.table.height(), path.display());
            }
        }
        Command::Normalize(args) => print_table_result(&run_normalize(&args)?),
        Command::Summary(args) => {
            let summary = run_summary(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else if summary.is_empty() {
                println!("No numeric columns to summarize.");
            } else {
                println!("{}", summary_table(&summary));
            }
        }
        Command::Methods => println!("{}", methods_table()),
    }
    Ok(())
}

fn print_table_result(result: &TableResult) {
    match &result.written {
        Some(path) => println!(
            "wrote {} rows to {} ({} rows read)",
            result.table.height(),
            path.display(),
            result.rows_before
        ),
        None => {
            println!("{}", preview_table(&result.table));
            println!("{}", preview_footer(&result.table));
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
