//! Conversion of raw spreadsheet cells into call lengths and start times.
//!
//! Spreadsheet exports encode the same quantity several ways: a call length
//! may be a fraction of a day (`0.0028472…`) or clock text (`00:04:06`), a
//! start time may be a serial day number or a date string. Both parsers return
//! `None` for anything they cannot read; the caller drops the row.

pub mod duration;
pub mod timestamp;

pub use duration::parse_duration;
pub use timestamp::{from_serial, parse_timestamp};

pub const SECS_PER_DAY: f64 = 86_400.0;
