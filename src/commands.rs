use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::analysis::{aggregate, analyze_rows, ensure_batch_size};
use crate::cli::{OutputArgs, OutputFormat};
use crate::error::AnalysisError;
use crate::ingest::{decode_file, JsonWorkbookDecoder, SheetSelection, TabularDecoder};
use crate::models::{DayInput, SkippedFile};
use crate::report::{render_batch, render_day, to_json};
use crate::settings::{Settings, SettingsStore};
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

fn sheet_for(output: &OutputArgs, settings: &Settings) -> SheetSelection {
    output
        .sheet
        .map(SheetSelection::Index)
        .unwrap_or(settings.sheet)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Single-file mode: the whole file is one shift.
pub fn analyze_file(path: &Path, output: &OutputArgs, settings: &Settings) -> Result<String> {
    analyze_with(&JsonWorkbookDecoder, path, output, settings)
}

pub fn analyze_with(
    decoder: &dyn TabularDecoder,
    path: &Path,
    output: &OutputArgs,
    settings: &Settings,
) -> Result<String> {
    let rows = decode_file(path, decoder, sheet_for(output, settings))?;
    if rows.is_empty() {
        bail!("No data found in {}", path.display());
    }

    let analysis = analyze_rows(&rows, &settings.columns, &settings.analysis)?;
    log_info!(
        "{}: {:.2} work hours from {} calls",
        file_label(path),
        analysis.work_hours(),
        analysis.total_calls
    );

    match output.format {
        OutputFormat::Text => Ok(render_day(&analysis)),
        OutputFormat::Json => to_json(&analysis),
    }
}

/// Multi-day mode: one file per day, folded into a summary.
pub fn analyze_batch(paths: &[PathBuf], output: &OutputArgs, settings: &Settings) -> Result<String> {
    batch_with(&JsonWorkbookDecoder, paths, output, settings)
}

pub fn batch_with(
    decoder: &dyn TabularDecoder,
    paths: &[PathBuf],
    output: &OutputArgs,
    settings: &Settings,
) -> Result<String> {
    // The cap applies before anything is read.
    ensure_batch_size(paths.len(), &settings.analysis)?;

    let sheet = sheet_for(output, settings);
    let mut inputs = Vec::with_capacity(paths.len());
    let mut unreadable = Vec::new();

    for path in paths {
        let label = file_label(path);
        match decode_file(path, decoder, sheet) {
            Ok(rows) => inputs.push(DayInput::new(label, rows)),
            Err(err) => {
                log_warn!("Skipping {label}: {err:#}");
                unreadable.push(SkippedFile {
                    label,
                    reason: format!("{err:#}"),
                });
            }
        }
    }

    let mut report = match aggregate(inputs, &settings.columns, &settings.analysis) {
        Ok(report) => report,
        Err(AnalysisError::NoValidFiles { .. }) => {
            return Err(AnalysisError::NoValidFiles {
                attempted: paths.len(),
            }
            .into())
        }
        Err(err) => return Err(err.into()),
    };
    report.skipped.extend(unreadable);

    match output.format {
        OutputFormat::Text => Ok(render_batch(&report)),
        OutputFormat::Json => to_json(&report),
    }
}

/// Write default settings to `path`.
pub fn init_config(path: PathBuf) -> Result<String> {
    let mut store = SettingsStore::new(path.clone())?;
    store.update(Settings::default())?;
    Ok(format!("Wrote default settings to {}", path.display()))
}
