use crate::error::{AnalysisError, AnalysisResult};
use crate::ingest::ColumnMapping;
use crate::models::{CallDirection, CallRecord, RawRow};
use crate::parsing::{parse_duration, parse_timestamp};
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

/// Turn one decoded row into a call record.
///
/// Fails with the first missing piece: start time, then length, then direction.
pub fn normalize_row(
    row_index: usize,
    row: &RawRow,
    columns: &ColumnMapping,
) -> AnalysisResult<CallRecord> {
    let start_time = row
        .get(&columns.start_time)
        .and_then(parse_timestamp)
        .ok_or(AnalysisError::UnparseableTimestamp { row: row_index })?;

    let duration_secs = row
        .get(&columns.length)
        .and_then(parse_duration)
        .ok_or(AnalysisError::UnparseableDuration { row: row_index })?;

    let direction = row
        .text(&columns.direction)
        .and_then(|label| CallDirection::parse(&label))
        .ok_or(AnalysisError::MissingDirection { row: row_index })?;

    Ok(CallRecord {
        row_index,
        start_time,
        duration_secs,
        direction,
        result: row.text(&columns.result).map(|r| r.to_lowercase()),
        to_number: row.text(&columns.to_number),
        from_number: row.text(&columns.from_number),
        raw: row.clone(),
    })
}

/// Normalize every row, silently dropping the ones that cannot be read.
///
/// Output keeps input order; sorting is up to the analyzer.
pub fn normalize(rows: &[RawRow], columns: &ColumnMapping) -> Vec<CallRecord> {
    let records: Vec<CallRecord> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| match normalize_row(index, row, columns) {
            Ok(record) => Some(record),
            Err(err) => {
                log_debug!("Dropping row: {err}");
                None
            }
        })
        .collect();

    let dropped = rows.len() - records.len();
    if dropped > 0 {
        log_info!(
            "Normalized {} of {} rows ({} dropped)",
            records.len(),
            rows.len(),
            dropped
        );
    }

    records
}
