//! CLI argument parsing for callwork

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary (default)
    Text,
    /// JSON for machine consumption
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "callwork")]
#[command(version)]
#[command(about = "Estimate agent work time from call-detail record exports", long_about = None)]
pub struct Cli {
    /// Settings file (JSON); defaults are used when omitted
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a single file as one shift
    Analyze {
        /// Decoded sheet export (JSON)
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Analyze one file per day and summarize across days
    Batch {
        /// Decoded sheet exports (JSON), one per day
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write the default settings to a file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Zero-based sheet index (default: second sheet if present, else first)
    #[arg(long, value_name = "INDEX")]
    pub sheet: Option<usize>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,
}
