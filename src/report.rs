//! Plain-text and JSON rendering of analysis results.

use std::fmt;

use anyhow::Result;
use serde::Serialize;

use crate::models::{BatchReport, CallRecord, DayAnalysis};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Render seconds as `HH:MM:SS`, rounded to the nearest second.
///
/// Hours are not wrapped at 24 and negative spans keep a leading `-`.
pub fn format_duration(secs: f64) -> String {
    let rounded = secs.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let total = rounded.abs() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}

pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}h")
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_day(day: &DayAnalysis) -> String {
    DayText(day).to_string()
}

/// Text view of one day.
struct DayText<'a>(&'a DayAnalysis);

impl fmt::Display for DayText<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_day(out, self.0)
    }
}

fn write_day(out: &mut fmt::Formatter<'_>, day: &DayAnalysis) -> fmt::Result {
    writeln!(out, "Date:              {}", day.date())?;
    writeln!(
        out,
        "Calls:             {} (outbound {}, inbound {}, connected {})",
        day.total_calls, day.outbound_calls, day.inbound_calls, day.connected_calls
    )?;
    writeln!(out, "First call:        {}", day.first_call_time.format(TIME_FORMAT))?;
    writeln!(out, "Last call end:     {}", day.last_call_end_time.format(TIME_FORMAT))?;
    writeln!(out, "Total time span:   {}", format_duration(day.total_time_span_secs))?;
    writeln!(out, "Total idle time:   {}", format_duration(day.total_idle_secs))?;
    writeln!(out, "Break allowance:   {}", format_duration(day.break_allowance_secs))?;
    writeln!(out, "Excess idle time:  {}", format_duration(day.excess_idle_secs))?;
    writeln!(out, "Actual work time:  {}", format_duration(day.actual_work_secs))?;

    if !day.idle_intervals.is_empty() {
        writeln!(out)?;
        writeln!(out, "Idle periods:")?;
        for interval in &day.idle_intervals {
            writeln!(
                out,
                "  {} - {}  gap {}  inbound {}  idle {}",
                interval.from.format(TIME_FORMAT),
                interval.to.format(TIME_FORMAT),
                format_duration(interval.raw_gap_secs),
                format_duration(interval.inbound_offset_secs as f64),
                format_duration(interval.idle_secs)
            )?;
            for call in &interval.gap_calls {
                write!(out, "      ")?;
                write_call(out, call)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Calls:")?;
    for call in &day.calls {
        write!(out, "  ")?;
        write_call(out, call)?;
    }
    Ok(())
}

fn write_call(out: &mut fmt::Formatter<'_>, call: &CallRecord) -> fmt::Result {
    writeln!(
        out,
        "{}  {:<8}  {}  {:<10}  to {}  from {}",
        call.start_time.format(TIME_FORMAT),
        call.direction.as_str(),
        format_duration(call.duration_secs as f64),
        call.result.as_deref().unwrap_or("-"),
        call.to_number.as_deref().unwrap_or("-"),
        call.from_number.as_deref().unwrap_or("-"),
    )
}

pub fn render_batch(report: &BatchReport) -> String {
    BatchText(report).to_string()
}

/// Text view of a batch: per-day table, totals, skipped files.
struct BatchText<'a>(&'a BatchReport);

impl fmt::Display for BatchText<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_batch(out, self.0)
    }
}

fn write_batch(out: &mut fmt::Formatter<'_>, report: &BatchReport) -> fmt::Result {
    writeln!(
        out,
        "{:<10}  {:<24}  {:>5}  {:>8}  {:>8}  {:>8}  {:>8}",
        "Date", "File", "Calls", "Outbound", "Work", "Break", "Excess"
    )?;
    for day in &report.days {
        let analysis = &day.analysis;
        writeln!(
            out,
            "{:<10}  {:<24}  {:>5}  {:>8}  {:>8}  {:>8}  {:>8}",
            day.date.to_string(),
            day.label,
            analysis.total_calls,
            analysis.outbound_calls,
            format_hours(analysis.work_hours()),
            format_hours(analysis.break_hours()),
            format_hours(analysis.excess_break_hours()),
        )?;
    }

    let summary = &report.summary;
    writeln!(out)?;
    writeln!(
        out,
        "Days: {}  Calls: {} (outbound {}, inbound {}, connected {})",
        summary.file_count,
        summary.total_calls,
        summary.total_outbound,
        summary.total_inbound,
        summary.total_connected
    )?;
    writeln!(
        out,
        "Work: {}  Average: {}/day  Break: {}  Excess break: {}",
        format_hours(summary.total_work_hours),
        format_hours(summary.avg_work_hours_per_day),
        format_hours(summary.total_break_hours),
        format_hours(summary.total_excess_break_hours)
    )?;

    if !report.skipped.is_empty() {
        writeln!(out)?;
        writeln!(out, "Skipped:")?;
        for skipped in &report.skipped {
            writeln!(out, "  {}: {}", skipped.label, skipped.reason)?;
        }
    }
    Ok(())
}
