use crate::analysis::config::AnalysisConfig;
use crate::analysis::gaps::find_idle_intervals;
use crate::error::{AnalysisError, AnalysisResult};
use crate::ingest::{normalize, ColumnMapping};
use crate::log_debug;
use crate::models::{seconds_between, CallRecord, DayAnalysis, RawRow};

const ENABLE_LOGS: bool = true;

/// Compute the work-time breakdown for one day of call records.
///
/// The shift spans from the first outbound call's start to the last outbound
/// call's end. Idle gaps beyond the break allowance are deducted from it.
pub fn analyze_day(
    mut calls: Vec<CallRecord>,
    config: &AnalysisConfig,
) -> AnalysisResult<DayAnalysis> {
    // Edge case: nothing survived normalization
    if calls.is_empty() {
        return Err(AnalysisError::NoValidCalls);
    }

    // Step 1: Chronological order; `sort_by` is stable so ties keep row order
    calls.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    // Step 2: Partition by direction
    let outbound: Vec<&CallRecord> = calls.iter().filter(|c| c.is_outbound()).collect();
    let inbound_calls = calls.iter().filter(|c| c.is_inbound()).count();

    let (first, last) = match (outbound.first(), outbound.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(AnalysisError::NoOutboundCalls),
    };

    // Step 3: Shift span; not clamped when calls overlap
    let first_call_time = first.start_time;
    let last_call_end_time = last.end_time();
    let total_time_span_secs = seconds_between(first_call_time, last_call_end_time);

    // Step 4: Idle gaps between consecutive outbound calls
    let scan = find_idle_intervals(&outbound, &calls, config.idle_threshold_secs);

    // Step 5: Break allowance
    let break_allowance_secs = config.break_allowance_secs as f64;
    let excess_idle_secs = (scan.total_idle_secs - break_allowance_secs).max(0.0);
    let actual_work_secs = total_time_span_secs - excess_idle_secs;

    let outbound_calls = outbound.len();
    let connected_calls = calls.iter().filter(|c| c.is_connected()).count();

    log_debug!(
        "Analyzed {} calls: span {:.0}s, idle {:.0}s over {} gaps, work {:.0}s",
        calls.len(),
        total_time_span_secs,
        scan.total_idle_secs,
        scan.intervals.len(),
        actual_work_secs
    );

    Ok(DayAnalysis {
        total_calls: calls.len(),
        outbound_calls,
        inbound_calls,
        connected_calls,
        first_call_time,
        last_call_end_time,
        total_time_span_secs,
        total_idle_secs: scan.total_idle_secs,
        break_allowance_secs,
        excess_idle_secs,
        actual_work_secs,
        idle_intervals: scan.intervals,
        calls,
    })
}

/// Normalize decoded rows and analyze them as one day.
pub fn analyze_rows(
    rows: &[RawRow],
    columns: &ColumnMapping,
    config: &AnalysisConfig,
) -> AnalysisResult<DayAnalysis> {
    let calls = normalize(rows, columns);
    if calls.is_empty() {
        return Err(AnalysisError::NoValidCalls);
    }
    analyze_day(calls, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CallDirection, RawRow};
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap()
    }

    fn call(
        row_index: usize,
        offset: i64,
        duration: i64,
        direction: CallDirection,
        result: &str,
    ) -> CallRecord {
        CallRecord {
            row_index,
            start_time: base() + TimeDelta::seconds(offset),
            duration_secs: duration,
            direction,
            result: Some(result.to_string()),
            to_number: None,
            from_number: None,
            raw: RawRow::new(),
        }
    }

    fn outbound(row_index: usize, offset: i64, duration: i64) -> CallRecord {
        call(row_index, offset, duration, CallDirection::Outbound, "connected")
    }

    #[test]
    fn inbound_call_inside_a_gap_reduces_idle_time() {
        let calls = vec![
            outbound(0, 0, 60),
            outbound(1, 1000, 30),
            call(2, 500, 50, CallDirection::Inbound, "connected"),
        ];

        let day = analyze_day(calls, &AnalysisConfig::default()).unwrap();

        assert_eq!(day.idle_intervals.len(), 1);
        let gap = &day.idle_intervals[0];
        assert_eq!(gap.raw_gap_secs, 940.0);
        assert_eq!(gap.inbound_offset_secs, 50);
        assert_eq!(gap.idle_secs, 890.0);
        assert_eq!(gap.from, base() + TimeDelta::seconds(60));
        assert_eq!(gap.to, base() + TimeDelta::seconds(1000));

        assert_eq!(day.total_idle_secs, 890.0);
        assert_eq!(day.excess_idle_secs, 0.0);
        assert_eq!(day.total_time_span_secs, 1030.0);
        assert_eq!(day.actual_work_secs, 1030.0);
        assert_eq!(day.first_call_time, base());
        assert_eq!(day.last_call_end_time, base() + TimeDelta::seconds(1030));
    }

    #[test]
    fn idle_threshold_is_exclusive() {
        let at_threshold = analyze_day(
            vec![outbound(0, 0, 60), outbound(1, 60 + 480, 60)],
            &AnalysisConfig::default(),
        )
        .unwrap();
        assert!(at_threshold.idle_intervals.is_empty());
        assert_eq!(at_threshold.total_idle_secs, 0.0);

        let above = analyze_day(
            vec![outbound(0, 0, 60), outbound(1, 60 + 481, 60)],
            &AnalysisConfig::default(),
        )
        .unwrap();
        assert_eq!(above.idle_intervals.len(), 1);
        assert_eq!(above.total_idle_secs, 481.0);
    }

    #[test]
    fn idle_beyond_break_allowance_is_deducted() {
        // Two one-hour gaps: 7200s idle, 4500s over the allowance.
        let calls = vec![
            outbound(0, 0, 600),
            outbound(1, 600 + 3600, 600),
            outbound(2, 600 + 3600 + 600 + 3600, 600),
        ];

        let day = analyze_day(calls, &AnalysisConfig::default()).unwrap();

        assert_eq!(day.total_time_span_secs, 9000.0);
        assert_eq!(day.total_idle_secs, 7200.0);
        assert_eq!(day.break_allowance_secs, 2700.0);
        assert_eq!(day.excess_idle_secs, 4500.0);
        assert_eq!(day.actual_work_secs, 4500.0);
        assert_eq!(day.work_hours(), 1.25);
        assert_eq!(day.break_hours(), 0.75);
        assert_eq!(day.excess_break_hours(), 1.25);
    }

    #[test]
    fn sorts_calls_and_counts_by_direction() {
        let calls = vec![
            call(0, 3000, 10, CallDirection::Inbound, "missed"),
            outbound(1, 100, 10),
            call(2, 50, 10, CallDirection::Other("internal".into()), "connected"),
            outbound(3, 0, 10),
        ];

        let day = analyze_day(calls, &AnalysisConfig::default()).unwrap();

        let order: Vec<usize> = day.calls.iter().map(|c| c.row_index).collect();
        assert_eq!(order, vec![3, 2, 1, 0]);
        assert_eq!(day.total_calls, 4);
        assert_eq!(day.outbound_calls, 2);
        assert_eq!(day.inbound_calls, 1);
        assert_eq!(day.connected_calls, 3);
    }

    #[test]
    fn equal_start_times_keep_row_order() {
        let calls = vec![
            call(0, 0, 10, CallDirection::Inbound, "connected"),
            outbound(1, 0, 10),
        ];

        let day = analyze_day(calls, &AnalysisConfig::default()).unwrap();
        let order: Vec<usize> = day.calls.iter().map(|c| c.row_index).collect();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn overlapping_calls_pass_through_negative_gaps() {
        let calls = vec![outbound(0, 0, 600), outbound(1, 100, 60)];

        let day = analyze_day(calls, &AnalysisConfig::default()).unwrap();

        // The later call ends before the earlier one does.
        assert_eq!(day.total_time_span_secs, 160.0);
        assert!(day.idle_intervals.is_empty());
        assert_eq!(day.actual_work_secs, 160.0);
    }

    #[test]
    fn failures_for_empty_and_inbound_only_days() {
        let config = AnalysisConfig::default();

        assert_eq!(analyze_day(Vec::new(), &config), Err(AnalysisError::NoValidCalls));
        assert_eq!(
            analyze_day(
                vec![call(0, 0, 10, CallDirection::Inbound, "connected")],
                &config
            ),
            Err(AnalysisError::NoOutboundCalls)
        );
    }

    #[test]
    fn custom_thresholds_apply() {
        let config = AnalysisConfig {
            idle_threshold_secs: 60,
            break_allowance_secs: 0,
            ..AnalysisConfig::default()
        };
        let calls = vec![outbound(0, 0, 60), outbound(1, 60 + 120, 60)];

        let day = analyze_day(calls, &config).unwrap();
        assert_eq!(day.total_idle_secs, 120.0);
        assert_eq!(day.excess_idle_secs, 120.0);
        assert_eq!(day.actual_work_secs, 120.0);
    }

    #[test]
    fn reanalysis_is_identical() {
        let calls = vec![
            outbound(0, 0, 60),
            call(1, 300, 45, CallDirection::Inbound, "connected"),
            outbound(2, 2000, 30),
            outbound(3, 5000, 90),
        ];

        let config = AnalysisConfig::default();
        let first = analyze_day(calls.clone(), &config).unwrap();
        let second = analyze_day(calls, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn very_long_inbound_calls_do_not_abort_analysis() {
        use crate::models::CellValue;

        let row = |start: &str, length: CellValue, direction: &str| {
            RawRow::new()
                .with("Call Start Time", start)
                .with("Call Length", length)
                .with("Call Direction", direction)
                .with("Result", "Connected")
        };
        let rows = vec![
            row("2024-03-04 09:00:00", "00:01:00".into(), "Outbound"),
            row("2024-03-04 09:02:00", CellValue::Number(1e14), "Inbound"),
            row("2024-03-04 09:03:00", CellValue::Number(1e14), "Inbound"),
            row("2024-03-04 09:30:00", "00:01:00".into(), "Outbound"),
        ];

        let day = analyze_rows(&rows, &ColumnMapping::default(), &AnalysisConfig::default())
            .unwrap();
        assert!(day.idle_intervals.is_empty());
        assert_eq!(day.total_time_span_secs, 31.0 * 60.0);
        assert_eq!(day.actual_work_secs, 31.0 * 60.0);
    }

    #[test]
    fn rows_without_valid_calls_fail() {
        let rows = vec![RawRow::new().with("Call Direction", "outbound")];
        assert_eq!(
            analyze_rows(&rows, &ColumnMapping::default(), &AnalysisConfig::default()),
            Err(AnalysisError::NoValidCalls)
        );
    }
}
