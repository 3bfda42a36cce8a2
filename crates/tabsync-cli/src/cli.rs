//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tabsync_store::DEFAULT_BATCH_SIZE;

#[derive(Parser)]
#[command(
    name = "tabsync",
    version,
    about = "Normalize tabular files for structured-store import",
    long_about = "Convert delimited tabular files of unknown formatting into a canonical,\n\
                  typed record set: header canonicalization, locale-tolerant value\n\
                  coercion, datetime column splitting, and destination schema inference."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a file's headers, their canonical forms, and the first rows.
    Preview(PreviewArgs),

    /// Normalize a file and emit records, an inferred schema, and DDL.
    Process(ProcessArgs),
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the CSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of rows to show.
    #[arg(long = "rows", value_name = "N", default_value_t = 10)]
    pub rows: usize,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the CSV file to normalize.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON file mapping canonical column names to coercion kinds
    /// (date, numeric, text).
    #[arg(long = "types", value_name = "JSON")]
    pub types: Option<PathBuf>,

    /// JSON file mapping normalized column names to destination names,
    /// applied after normalization.
    #[arg(long = "mapping", value_name = "JSON")]
    pub mapping: Option<PathBuf>,

    /// Detect combined date+time columns and split them into
    /// date_/heure_ pairs.
    #[arg(long = "split-datetime")]
    pub split_datetime: bool,

    /// Destination table name; enables the dry-run insertion summary.
    #[arg(long = "table", value_name = "NAME")]
    pub table: Option<String>,

    /// Write the normalized records to this path as JSON.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Print CREATE TABLE DDL for the inferred schema.
    #[arg(long = "ddl")]
    pub ddl: bool,

    /// Records per insertion batch.
    #[arg(long = "batch-size", value_name = "N", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
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
