//! Typed row extraction from the normalized table

use crate::input::RawTable;

use super::columns::ColumnLayout;

/// One menu item, as read from a spreadsheet row.
///
/// Identifier-like fields are pre-trimmed; free text is carried verbatim and
/// escaped at emit time. `ingredients` is validated as a column but carries
/// nothing downstream, so it is not extracted.
#[derive(Debug, Clone)]
pub struct MenuRow {
    /// 1-based spreadsheet row number, counting the header row
    pub sheet_row: usize,
    pub item_id: String,
    pub item_name: String,
    pub average_preparation_time: String,
    pub is_kids_friendly: String,
    pub special_instruction: String,
    pub allergic_information: String,
    pub spice_level: String,
    pub pairing_recommendation: String,
}

impl MenuRow {
    pub fn has_item_id(&self) -> bool {
        !self.item_id.is_empty()
    }
}

/// Extract every data row from the table in input order.
pub fn extract_rows(table: &RawTable, layout: &ColumnLayout) -> Vec<MenuRow> {
    let cell = |row: usize, logical: &str| -> String {
        layout
            .position(logical)
            .map(|col| table.cell(row, col).to_string())
            .unwrap_or_default()
    };

    (0..table.rows.len())
        .map(|i| MenuRow {
            // +2: one for the header row, one for 1-based numbering
            sheet_row: i + 2,
            item_id: cell(i, "item_id").trim().to_string(),
            item_name: cell(i, "item_name").trim().to_string(),
            average_preparation_time: cell(i, "average_preparation_time"),
            is_kids_friendly: cell(i, "is_kids_friendly"),
            special_instruction: cell(i, "special_instruction"),
            allergic_information: cell(i, "allergic_information"),
            spice_level: cell(i, "spice_level").trim().to_string(),
            pairing_recommendation: cell(i, "pairing_recommendation"),
        })
        .collect()
}
