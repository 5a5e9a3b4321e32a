//! CLI argument definitions for the registry cleaner.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "warga",
    version,
    about = "Civil-registry cleaner - normalize resident records",
    long_about = "Normalize raw civil-registry CSV exports.\n\n\
                  Corrects known misspellings in dusun and marital-status\n\
                  fields, derives age and age bracket from the birthdate,\n\
                  and canonicalizes household identifiers."
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
    /// Clean a raw registry CSV and write the canonical dataset.
    Clean(CleanArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw registry CSV export.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output path (default: <input stem>_FINAL.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Reference date for age derivation, YYYY-MM-DD (default: today).
    ///
    /// Ages are whole 365-day years between the birthdate and this
    /// date. Pin it to make runs reproducible.
    #[arg(long = "reference-date", value_name = "DATE")]
    pub reference_date: Option<NaiveDate>,

    /// Transform and report without writing the output artifact.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
