//! Work-time estimation from call-detail record exports.
//!
//! Rows decoded from a spreadsheet are normalized into [`models::CallRecord`]s,
//! analyzed per day by [`analysis::analyze_day`], and folded across days by
//! [`analysis::aggregate`].

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod error;
pub mod ingest;
pub mod models;
pub mod parsing;
pub mod report;
pub mod settings;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use settings::{Settings, SettingsStore};

pub use analysis::{aggregate, analyze_day, analyze_rows, AnalysisConfig};
pub use error::AnalysisError;
pub use ingest::{normalize, ColumnMapping, JsonWorkbookDecoder, SheetSelection, TabularDecoder};
pub use models::{AggregateSummary, BatchReport, CallRecord, DayAnalysis, DayReport, RawRow};
pub use parsing::{parse_duration, parse_timestamp};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (reads RUST_LOG env var)
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::debug!("callwork starting up...");

    let settings = match &cli.config {
        Some(path) => SettingsStore::new(path.clone())?.settings().clone(),
        None => Settings::default(),
    };

    let output = match cli.command {
        Command::Analyze { file, output } => commands::analyze_file(&file, &output, &settings)?,
        Command::Batch { files, output } => commands::analyze_batch(&files, &output, &settings)?,
        Command::InitConfig { path } => commands::init_config(path)?,
    };

    println!("{output}");
    Ok(())
}
