use crate::models::{seconds_between, CallRecord, IdleInterval};

/// Idle intervals found between consecutive outbound calls.
#[derive(Debug, Clone, Default)]
pub struct GapScan {
    pub intervals: Vec<IdleInterval>,
    pub total_idle_secs: f64,
}

/// Walk adjacent outbound pairs and keep the gaps whose net idle time exceeds
/// `idle_threshold_secs`.
///
/// `outbound` must be in chronological order. Connected inbound calls that
/// start strictly inside a gap are subtracted from it. Gaps at or below the
/// threshold contribute nothing, not even partially.
pub fn find_idle_intervals(
    outbound: &[&CallRecord],
    calls: &[CallRecord],
    idle_threshold_secs: i64,
) -> GapScan {
    let threshold = idle_threshold_secs as f64;
    let mut scan = GapScan::default();

    for pair in outbound.windows(2) {
        let (current, next) = (pair[0], pair[1]);

        let current_end = current.end_time();
        // Overlapping calls give a negative gap; it is kept as-is.
        let raw_gap_secs = seconds_between(current_end, next.start_time);

        let gap_calls: Vec<CallRecord> = calls
            .iter()
            .filter(|call| {
                call.start_time > current_end
                    && call.start_time < next.start_time
                    && call.is_inbound()
                    && call.is_connected()
            })
            .cloned()
            .collect();

        // Lengths are not range-checked upstream; saturate instead of overflowing.
        let inbound_offset_secs = gap_calls
            .iter()
            .fold(0i64, |acc, call| acc.saturating_add(call.duration_secs));
        let idle_secs = raw_gap_secs - inbound_offset_secs as f64;

        if idle_secs > threshold {
            scan.total_idle_secs += idle_secs;
            scan.intervals.push(IdleInterval {
                from: current_end,
                to: next.start_time,
                raw_gap_secs,
                inbound_offset_secs,
                idle_secs,
                gap_calls,
            });
        }
    }

    scan
}
