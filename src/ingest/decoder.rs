use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{CellValue, RawRow};

/// Which sheet of a workbook holds the call records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SheetSelection {
    /// Second sheet if there is one, otherwise the first.
    #[default]
    Auto,
    /// Zero-based sheet index.
    Index(usize),
}

impl SheetSelection {
    /// Resolve to a sheet index, `None` if the workbook has no such sheet.
    pub fn pick(self, sheet_count: usize) -> Option<usize> {
        match self {
            SheetSelection::Auto if sheet_count >= 2 => Some(1),
            SheetSelection::Auto if sheet_count == 1 => Some(0),
            SheetSelection::Auto => None,
            SheetSelection::Index(index) if index < sheet_count => Some(index),
            SheetSelection::Index(_) => None,
        }
    }
}

/// Turns the bytes of a tabular file into rows.
pub trait TabularDecoder {
    fn decode(&self, bytes: &[u8], sheet: SheetSelection) -> Result<Vec<RawRow>>;
}

/// Decoder for JSON sheet exports.
///
/// Accepts either a bare array of row objects (a single sheet) or a workbook:
/// `{"sheets": [{"name": "...", "rows": [{...}, ...]}, ...]}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWorkbookDecoder;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonExport {
    Rows(Vec<Map<String, Value>>),
    Workbook { sheets: Vec<JsonSheet> },
}

#[derive(Deserialize)]
struct JsonSheet {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    rows: Vec<Map<String, Value>>,
}

impl TabularDecoder for JsonWorkbookDecoder {
    fn decode(&self, bytes: &[u8], sheet: SheetSelection) -> Result<Vec<RawRow>> {
        let export: JsonExport =
            serde_json::from_slice(bytes).context("not a JSON row array or workbook")?;

        let mut sheets = match export {
            JsonExport::Rows(rows) => vec![JsonSheet { name: None, rows }],
            JsonExport::Workbook { sheets } => sheets,
        };

        if sheets.is_empty() {
            bail!("workbook contains no sheets");
        }

        let count = sheets.len();
        let index = sheet
            .pick(count)
            .ok_or_else(|| anyhow!("sheet {sheet:?} not found ({count} sheets available)"))?;
        let chosen = sheets.swap_remove(index);

        log::debug!(
            "Decoding sheet {} ({}) with {} rows",
            index,
            chosen.name.as_deref().unwrap_or("unnamed"),
            chosen.rows.len()
        );

        Ok(chosen.rows.into_iter().map(row_from_object).collect())
    }
}

fn row_from_object(object: Map<String, Value>) -> RawRow {
    object
        .into_iter()
        .map(|(column, value)| (column, CellValue::from(value)))
        .collect()
}

/// Read and decode a file from disk.
pub fn decode_file(
    path: &Path,
    decoder: &dyn TabularDecoder,
    sheet: SheetSelection,
) -> Result<Vec<RawRow>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    decoder
        .decode(&bytes, sheet)
        .with_context(|| format!("Failed to decode {}", path.display()))
}
