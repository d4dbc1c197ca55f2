use chrono::NaiveDate;
use serde::Serialize;

use super::analysis::DayAnalysis;
use super::cell::RawRow;

/// Rows decoded from one uploaded file.
#[derive(Debug, Clone)]
pub struct DayInput {
    pub label: String,
    pub rows: Vec<RawRow>,
}

impl DayInput {
    pub fn new(label: impl Into<String>, rows: Vec<RawRow>) -> Self {
        Self {
            label: label.into(),
            rows,
        }
    }
}

/// A successful day in a batch, labelled with its file and date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    pub label: String,
    pub date: NaiveDate,
    pub analysis: DayAnalysis,
}

/// A file the batch could not analyze, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedFile {
    pub label: String,
    pub reason: String,
}

/// Totals and averages across the days of a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub file_count: usize,
    pub total_calls: usize,
    pub total_outbound: usize,
    pub total_inbound: usize,
    pub total_connected: usize,
    pub total_work_hours: f64,
    pub total_break_hours: f64,
    pub total_excess_break_hours: f64,
    pub avg_work_hours_per_day: f64,
}

impl AggregateSummary {
    pub fn from_days(days: &[DayReport]) -> Self {
        let mut summary = days.iter().fold(Self::default(), |mut acc, day| {
            let analysis = &day.analysis;
            acc.file_count += 1;
            acc.total_calls += analysis.total_calls;
            acc.total_outbound += analysis.outbound_calls;
            acc.total_inbound += analysis.inbound_calls;
            acc.total_connected += analysis.connected_calls;
            acc.total_work_hours += analysis.work_hours();
            acc.total_break_hours += analysis.break_hours();
            acc.total_excess_break_hours += analysis.excess_break_hours();
            acc
        });

        if summary.file_count > 0 {
            summary.avg_work_hours_per_day = summary.total_work_hours / summary.file_count as f64;
        }
        summary
    }
}

/// Outcome of a multi-day batch: days in date order, their summary, and the
/// files that were skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub days: Vec<DayReport>,
    pub summary: AggregateSummary,
    pub skipped: Vec<SkippedFile>,
}
