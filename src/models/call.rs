use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use super::cell::RawRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Outbound,
    Inbound,
    /// Any other non-empty direction label; counted but never partitioned.
    Other(String),
}

impl CallDirection {
    /// Case-insensitive parse. Blank labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        match label.as_str() {
            "" => None,
            "outbound" => Some(CallDirection::Outbound),
            "inbound" => Some(CallDirection::Inbound),
            _ => Some(CallDirection::Other(label)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CallDirection::Outbound => "outbound",
            CallDirection::Inbound => "inbound",
            CallDirection::Other(label) => label,
        }
    }
}

/// Result value marking an answered call.
pub const CONNECTED_RESULT: &str = "connected";

/// A normalized call-detail record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    /// Position of the source row, used to keep sorting stable.
    pub row_index: usize,
    pub start_time: NaiveDateTime,
    pub duration_secs: i64,
    pub direction: CallDirection,
    pub result: Option<String>,
    pub to_number: Option<String>,
    pub from_number: Option<String>,
    pub raw: RawRow,
}

impl CallRecord {
    /// Start time plus call length, saturating at the representable range.
    pub fn end_time(&self) -> NaiveDateTime {
        TimeDelta::try_seconds(self.duration_secs)
            .and_then(|length| self.start_time.checked_add_signed(length))
            .unwrap_or(if self.duration_secs < 0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            })
    }

    pub fn is_outbound(&self) -> bool {
        self.direction == CallDirection::Outbound
    }

    pub fn is_inbound(&self) -> bool {
        self.direction == CallDirection::Inbound
    }

    pub fn is_connected(&self) -> bool {
        self.result.as_deref() == Some(CONNECTED_RESULT)
    }
}

/// Signed seconds from `from` to `to`, at millisecond resolution.
pub fn seconds_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}
