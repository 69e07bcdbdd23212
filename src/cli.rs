use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "finchart")]
#[command(author, version, about = "Render, validate and export financial chart data")]
#[command(long_about = "Render the chart-data documents produced by a financial data analyst \
    agent as text, SVG, HTML, Markdown or JSON, and export tables as CSV.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Contract issues found (validate)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render chart documents (chart data, agent responses, transcripts)
    Render(RenderArgs),

    /// Export the tabular data of a chart as CSV
    Export(ExportArgs),

    /// Build a table chart from raw query result rows
    Infer(InferArgs),

    /// Check chart documents against the chart-data contract
    Validate(ValidateArgs),

    /// Build an HTML report of every chart in a transcript, newest first
    Report(ReportArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Chart documents, or directories containing `*.json` documents
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format [possible values: text, svg, html, markdown, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chart width in pixels (overrides config)
    #[arg(long)]
    pub width: Option<f64>,

    /// Chart height in pixels (overrides config)
    #[arg(long)]
    pub height: Option<f64>,

    /// Document title for HTML output
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Chart document to export
    pub input: PathBuf,

    /// Directory for the CSV files (overrides config `export.output_dir`)
    #[arg(short = 'd', long)]
    pub dir: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing files
    #[arg(long, conflicts_with = "dir")]
    pub stdout: bool,
}

#[derive(Parser, Debug)]
pub struct InferArgs {
    /// JSON rows: `[{...}, ...]` or `{ "rows": [...] }`
    pub input: PathBuf,

    /// Title of the generated table
    #[arg(long, default_value = "")]
    pub title: String,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Chart documents, or directories containing `*.json` documents
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Conversation transcript (array of messages or `{ "messages": [...] }`)
    pub transcript: PathBuf,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".finchart.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
