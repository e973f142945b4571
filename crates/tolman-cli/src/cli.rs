//! CLI argument definitions for the tolerance manager.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tolman",
    version,
    about = "Tolerance Manager - edit bounded item tolerances with live validation",
    long_about = "Edit bounded numeric tolerances attached to items.\n\n\
                  Candidate values are validated as they are staged, applied\n\
                  atomically to a JSON store, and collected into a batch\n\
                  submission payload."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON store file.
    #[arg(
        long = "store",
        value_name = "PATH",
        global = true,
        default_value_os_t = tolman_persistence::default_store_path()
    )]
    pub store: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Show every item with its tolerances and allowed ranges.
    List,

    /// Validate one item, optionally against hypothetical values.
    Check(CheckArgs),

    /// Edit items interactively against the store file.
    Edit,

    /// Rewrite the store file with the built-in seed items.
    Reset,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Id of the item to validate.
    #[arg(value_name = "ITEM_ID")]
    pub item_id: String,

    /// Hypothetical value as NAME=VALUE or ID=VALUE. Repeatable.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
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
