use crate::analysis::algorithm::analyze_rows;
use crate::analysis::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::ingest::ColumnMapping;
use crate::models::{AggregateSummary, BatchReport, DayInput, DayReport, SkippedFile};
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// Reject batches larger than the configured cap.
pub fn ensure_batch_size(count: usize, config: &AnalysisConfig) -> AnalysisResult<()> {
    if count > config.max_batch_files {
        return Err(AnalysisError::TooManyFiles {
            count,
            max: config.max_batch_files,
        });
    }
    Ok(())
}

/// Analyze one file per day and fold the results into a summary.
///
/// Files without analyzable calls are skipped and listed in the report. The
/// batch only fails when it is over the size cap (before any work is done) or
/// when no file succeeds.
pub fn aggregate(
    inputs: Vec<DayInput>,
    columns: &ColumnMapping,
    config: &AnalysisConfig,
) -> AnalysisResult<BatchReport> {
    ensure_batch_size(inputs.len(), config)?;

    let attempted = inputs.len();
    let mut days = Vec::with_capacity(attempted);
    let mut skipped = Vec::new();

    for input in inputs {
        match analyze_rows(&input.rows, columns, config) {
            Ok(analysis) => {
                log_info!(
                    "{}: {} calls, {:.2} work hours",
                    input.label,
                    analysis.total_calls,
                    analysis.work_hours()
                );
                days.push(DayReport {
                    date: analysis.date(),
                    label: input.label,
                    analysis,
                });
            }
            Err(err) => {
                log_warn!("Skipping {}: {}", input.label, err);
                skipped.push(SkippedFile {
                    label: input.label,
                    reason: err.to_string(),
                });
            }
        }
    }

    if days.is_empty() {
        return Err(AnalysisError::NoValidFiles { attempted });
    }

    days.sort_by_key(|day| day.date);
    let summary = AggregateSummary::from_days(&days);

    Ok(BatchReport {
        days,
        summary,
        skipped,
    })
}
