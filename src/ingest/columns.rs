use serde::{Deserialize, Serialize};

/// Source column names for the fields the analyzer reads.
///
/// Names are matched case-sensitively against the decoded header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMapping {
    pub start_time: String,
    pub length: String,
    pub direction: String,
    pub result: String,
    /// Display only.
    pub to_number: String,
    /// Display only.
    pub from_number: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            start_time: "Call Start Time".into(),
            length: "Call Length".into(),
            direction: "Call Direction".into(),
            result: "Result".into(),
            to_number: "To Number".into(),
            from_number: "From Number".into(),
        }
    }
}
