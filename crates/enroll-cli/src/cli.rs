//! CLI argument definitions for the enrollment transpiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "enroll-transpiler",
    version,
    about = "Enrollment Transpiler - Convert student enrollment exports to the SN upload layout",
    long_about = "Convert a wide student-enrollment CSV export into the fixed 29-column\n\
                  SN upload layout, flagging identifier, email and contact-number\n\
                  problems without dropping rows."
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
    /// Transform an enrollment export and write the upload CSV.
    Transform(TransformArgs),

    /// Run the pipeline for its diagnostics only, writing nothing.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct TransformArgs {
    /// Path to the source CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: <timestamp>-alumnos-sn.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Institution identifier stamped on every row.
    #[arg(long = "rbd", default_value_t = 574)]
    pub rbd: u32,

    /// Academic year stamped on every row.
    #[arg(long = "year", default_value_t = 2025)]
    pub year: i32,

    /// Campus label stamped on every row.
    #[arg(long = "local", default_value = "Principal")]
    pub local: String,

    /// Field delimiter of the source and output CSV.
    #[arg(long = "delimiter", default_value_t = ';')]
    pub delimiter: char,

    /// Separator between day, month and year in source dates.
    #[arg(long = "date-separator", default_value_t = '-')]
    pub date_separator: char,

    /// Run the pipeline and report without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip identifier and email validation.
    #[arg(long = "skip-validation")]
    pub skip_validation: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the source CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Field delimiter of the source CSV.
    #[arg(long = "delimiter", default_value_t = ';')]
    pub delimiter: char,

    /// Separator between day, month and year in source dates.
    #[arg(long = "date-separator", default_value_t = '-')]
    pub date_separator: char,
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
