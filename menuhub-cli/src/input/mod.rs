//! Spreadsheet readers producing an in-memory table
//!
//! The whole file is loaded up front; the pipeline never streams.

mod csv;
mod excel;

use std::path::Path;

use anyhow::{Result, bail};

pub use csv::read_csv;
pub use excel::read_excel;

/// An untyped table straight out of the file: one header row plus a grid of
/// cell text. All cells are already stringified by the reader.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Cell text at (row, col), empty string when the row is ragged.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}

/// Read a table from a file, picking the reader by extension.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xlsx" | "xls" => read_excel(path),
        "csv" => read_csv(path),
        other => bail!(
            "Unsupported input format '{}': expected .xlsx, .xls or .csv",
            other
        ),
    }
}
