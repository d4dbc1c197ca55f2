use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

/// A single spreadsheet cell as handed over by a tabular decoder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Text form of the cell, `None` for empty cells.
    ///
    /// Whole numbers render without a fractional part (`5`, not `5.0`).
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::Empty => None,
            CellValue::Bool(value) => Some(Cow::Owned(value.to_string())),
            CellValue::Number(value) => Some(Cow::Owned(value.to_string())),
            CellValue::Text(value) => Some(Cow::Borrowed(value.as_str())),
            CellValue::DateTime(value) => {
                Some(Cow::Owned(value.format("%Y-%m-%d %H:%M:%S").to_string()))
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(CellValue::Empty, CellValue::Number),
            Value::String(s) => CellValue::Text(s),
            // Nested structures have no spreadsheet meaning; keep them displayable.
            other @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// One decoded spreadsheet row: column name to raw cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawRow {
    cells: BTreeMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Builder-style insert, handy when assembling rows by hand.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Looks up a column. Missing columns and empty cells both yield `None`.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column).filter(|value| !value.is_empty())
    }

    /// Text of a column, `None` when missing, empty, or blank after trimming.
    pub fn text(&self, column: &str) -> Option<String> {
        let text = self.get(column)?.as_text()?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
