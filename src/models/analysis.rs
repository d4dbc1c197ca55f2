use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::call::CallRecord;

const SECS_PER_HOUR: f64 = 3600.0;

/// A gap between two outbound calls whose net idle time exceeded the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleInterval {
    /// End of the earlier outbound call.
    pub from: NaiveDateTime,
    /// Start of the later outbound call.
    pub to: NaiveDateTime,
    pub raw_gap_secs: f64,
    pub inbound_offset_secs: i64,
    pub idle_secs: f64,
    /// Connected inbound calls that produced the offset.
    pub gap_calls: Vec<CallRecord>,
}

/// Work-time breakdown for one set of call records (one day).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAnalysis {
    pub total_calls: usize,
    pub outbound_calls: usize,
    pub inbound_calls: usize,
    pub connected_calls: usize,
    pub first_call_time: NaiveDateTime,
    pub last_call_end_time: NaiveDateTime,
    pub total_time_span_secs: f64,
    pub total_idle_secs: f64,
    pub break_allowance_secs: f64,
    pub excess_idle_secs: f64,
    pub actual_work_secs: f64,
    pub calls: Vec<CallRecord>,
    pub idle_intervals: Vec<IdleInterval>,
}

impl DayAnalysis {
    /// Calendar date of the first outbound call.
    pub fn date(&self) -> NaiveDate {
        self.first_call_time.date()
    }

    pub fn work_hours(&self) -> f64 {
        self.actual_work_secs / SECS_PER_HOUR
    }

    /// Idle time absorbed by the break allowance.
    pub fn break_hours(&self) -> f64 {
        self.total_idle_secs.min(self.break_allowance_secs) / SECS_PER_HOUR
    }

    pub fn excess_break_hours(&self) -> f64 {
        self.excess_idle_secs / SECS_PER_HOUR
    }
}
