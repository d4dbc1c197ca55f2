pub mod analysis;
pub mod batch;
pub mod call;
pub mod cell;

pub use analysis::{DayAnalysis, IdleInterval};
pub use batch::{AggregateSummary, BatchReport, DayInput, DayReport, SkippedFile};
pub use call::{seconds_between, CallDirection, CallRecord, CONNECTED_RESULT};
pub use cell::{CellValue, RawRow};
