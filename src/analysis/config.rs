use serde::{Deserialize, Serialize};

/// Net idle time above which a gap between outbound calls counts as idle.
pub const IDLE_THRESHOLD_SECS: i64 = 8 * 60;

/// Accumulated idle time treated as a legitimate break.
pub const BREAK_ALLOWANCE_SECS: i64 = 45 * 60;

/// Most files a single batch may contain.
pub const MAX_BATCH_FILES: usize = 10;

/// Tunable thresholds for the work-time analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisConfig {
    /// Gaps must exceed this (strictly) to count as idle.
    pub idle_threshold_secs: i64,

    /// Idle time up to this amount is not deducted from the shift.
    pub break_allowance_secs: i64,

    pub max_batch_files: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            idle_threshold_secs: IDLE_THRESHOLD_SECS,
            break_allowance_secs: BREAK_ALLOWANCE_SECS,
            max_batch_files: MAX_BATCH_FILES,
        }
    }
}
