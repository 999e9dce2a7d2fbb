//! CLI argument definitions for the schema-form host.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "schemaform",
    version,
    about = "Schema-driven form engine - derive, render and validate form state",
    long_about = "Derive default form state from a JSON schema, print the rendered\n\
                  field tree with its stable identifiers, and validate form data\n\
                  with path-qualified issues."
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
    /// Derive default form state and print the rendered field tree.
    Render(RenderArgs),

    /// Validate form data against a schema and report issues.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Path to the JSON schema document.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Existing form data merged into the derived state.
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Identifier assigned to the form instance.
    #[arg(long = "form-id", value_name = "ID", default_value = "form")]
    pub form_id: String,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the JSON schema document.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Form data to validate (defaults to the derived default state).
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Write the validation report as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Identifier recorded in the report.
    #[arg(long = "form-id", value_name = "ID", default_value = "form")]
    pub form_id: String,
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
