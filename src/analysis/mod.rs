pub mod aggregate;
pub mod algorithm;
pub mod config;
pub mod gaps;

pub use aggregate::{aggregate, ensure_batch_size};
pub use algorithm::{analyze_day, analyze_rows};
pub use config::{AnalysisConfig, BREAK_ALLOWANCE_SECS, IDLE_THRESHOLD_SECS, MAX_BATCH_FILES};
pub use gaps::{find_idle_intervals, GapScan};
