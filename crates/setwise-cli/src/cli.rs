//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "setwise",
    version,
    about = "Check hobbit records against named rules",
    long_about = "Check hobbit registry records against named predicate rules.\n\n\
                  Every field is checked; a rejected record lists every failing field."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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

    /// Include record values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Report format.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check one hobbit record.
    Check(CheckArgs),

    /// List the hobbit rules and their definitions.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Database id.
    #[arg(long = "id", allow_negative_numbers = true)]
    pub id: i64,

    /// First name.
    #[arg(long = "first")]
    pub first_name: String,

    /// Last name.
    #[arg(long = "last")]
    pub last_name: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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
