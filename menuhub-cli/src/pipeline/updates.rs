//! Item attribute UPDATE statements

use super::fields::{escape_for_sql, extract_prep_minutes, normalize_boolean};
use super::rows::MenuRow;

/// Outcome of transforming one row into an UPDATE statement.
///
/// Skips never abort the batch; they surface as `--` comments in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowUpdate {
    Statement(String),
    Skipped { sheet_row: usize, reason: String },
}

/// Transform a single row. Rows without an item id produce a skip.
pub fn row_update(row: &MenuRow) -> RowUpdate {
    if !row.has_item_id() {
        return RowUpdate::Skipped {
            sheet_row: row.sheet_row,
            reason: "Missing item_id".to_string(),
        };
    }

    let attributes = attributes_json(row);
    // The JSON goes inside a single-quoted SQL literal, so its quotes get
    // doubled a second time on top of the per-field escaping.
    let attributes_sql = attributes.replace('\'', "''");

    RowUpdate::Statement(format!(
        "update mh_items set attributes = '{}' where id = '{}';",
        attributes_sql, row.item_id
    ))
}

/// Build the JSON-shaped attributes text with its four keys in fixed order.
///
/// Built by hand rather than with a serializer: the field values are already
/// SQL-escaped and must land in the JSON byte-for-byte.
fn attributes_json(row: &MenuRow) -> String {
    format!(
        "{{\"allergicInfo\": \"{}\", \"kidsFriendly\": {}, \"prepTimeInMins\": \"{}\", \"specialInstructions\": \"{}\"}}",
        escape_for_sql(&row.allergic_information),
        normalize_boolean(&row.is_kids_friendly),
        extract_prep_minutes(&row.average_preparation_time),
        escape_for_sql(&row.special_instruction),
    )
}

/// Render the full UPDATE block: header comment, transaction framing, skip
/// comments (in row order) followed by the statements (in row order).
pub fn update_block(rows: &[MenuRow]) -> Vec<String> {
    let mut lines = vec![
        "-- Below are UPDATE queries for mh_items".to_string(),
        "START TRANSACTION;".to_string(),
    ];
    let mut statements = Vec::new();

    for row in rows {
        match row_update(row) {
            RowUpdate::Statement(sql) => statements.push(sql),
            RowUpdate::Skipped { sheet_row, reason } => {
                lines.push(format!("-- Skipping row {}: {}", sheet_row, reason));
            }
        }
    }

    lines.extend(statements);
    lines.push("COMMIT;".to_string());
    lines
}
