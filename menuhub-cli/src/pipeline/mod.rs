//! Row-to-SQL transformation pipeline
//!
//! One-way data flow: raw table -> normalized table -> per-row derived
//! values -> accumulated statement lines -> final SQL document. The only
//! fatal condition is missing required columns; everything row-local becomes
//! a `--` comment in the output.

pub mod columns;
pub mod fields;
pub mod filter_tags;
pub mod ids;
pub mod recommendations;
pub mod rows;
pub mod updates;

use anyhow::Result;

use crate::input::RawTable;

pub use columns::{ColumnLayout, MissingColumns};
pub use ids::{IdGenerator, UuidGenerator};

/// Default name of the generated SQL document.
pub const OUTPUT_FILE_NAME: &str = "menu_hub_update_queries.sql";

/// Run the whole pipeline over a loaded table and render the SQL document.
///
/// `location_id` is embedded verbatim in the filter-tag rows. Tag ids come
/// from the injected generator, so they are fresh on every run.
pub fn generate_sql(
    table: &RawTable,
    location_id: &str,
    ids: &mut dyn IdGenerator,
) -> Result<String> {
    let layout = ColumnLayout::from_headers(&table.headers)?;
    let menu_rows = rows::extract_rows(table, &layout);

    log::info!(
        "Generating SQL for {} rows ({} columns)",
        menu_rows.len(),
        layout.cleaned.len()
    );

    let mut lines = Vec::new();
    lines.push(format!("-- Original Columns: {:?}", layout.original));
    lines.push(format!("-- Cleaned Columns: {:?}", layout.cleaned));
    lines.push(String::new());

    lines.extend(updates::update_block(&menu_rows));
    lines.push(String::new());

    lines.extend(recommendations::recommendation_block(&menu_rows));
    lines.push(String::new());

    lines.extend(filter_tags::filter_tag_block(&menu_rows, location_id, ids));

    let mut document = lines.join("\n");
    document.push('\n');
    Ok(document)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ids::SequentialGenerator;
    use crate::pipeline::test_support::menu_table;

    #[test]
    fn test_generate_sql_end_to_end() {
        let (table, _) = menu_table(&[
            &[
                "I1", "Samosa", "5-10 mins", "Yes", "Serve hot", "Nuts", "Hot", "Potato",
                "Lassi",
            ],
            &["I2", "Lassi", "2-5 mins", "yes", "", "Dairy", "", "Milk", ""],
            &["", "Ghost Row", "", "", "", "", "Hot", "", ""],
        ]);
        let mut ids = SequentialGenerator::default();

        let sql = generate_sql(&table, "LOC-1", &mut ids).unwrap();

        // Header comment echoes both header forms
        assert!(sql.starts_with("-- Original Columns: [\"Item ID\""));
        assert!(sql.contains("-- Cleaned Columns: [\"item_id\""));

        // Section order: updates, recommendations, tags
        let updates_pos = sql.find("-- Below are UPDATE queries for mh_items").unwrap();
        let recs_pos = sql
            .find("-- Below are INSERT queries for mh_item_recommendation")
            .unwrap();
        let tags_pos = sql
            .find("-- Below are queries for Spice Level Tags and their Media")
            .unwrap();
        assert!(updates_pos < recs_pos && recs_pos < tags_pos);

        // Each section carries its own transaction framing
        assert_eq!(sql.matches("START TRANSACTION;").count(), 3);
        assert_eq!(sql.matches("COMMIT;").count(), 3);

        // Row 4 has no item_id: skipped everywhere, never partially emitted
        assert!(sql.contains("-- Skipping row 4: Missing item_id"));
        assert!(sql.contains("-- Skipping recommendations for row 4: Missing base item_id"));
        assert_eq!(sql.matches("update mh_items").count(), 2);

        // I1 -> Lassi resolves to I2
        assert!(sql.contains("('I1', 'I2')"));

        // One tag for "Hot", linked only to the row with an id
        assert!(sql.contains("('tag-1', 'LOC-1', 'Hot', '1');"));
        assert!(sql.contains("INSERT INTO mh_item_filter_tag (item_id, filter_tag_id) VALUES\n('I1', 'tag-1');"));
        assert!(sql.contains("'tag-1.png'"));

        assert!(sql.ends_with("COMMIT;\n"));
    }

    #[test]
    fn test_generate_sql_missing_columns_is_fatal() {
        let table = RawTable {
            headers: vec!["Item ID".to_string(), "Item Name".to_string()],
            rows: vec![],
        };
        let mut ids = SequentialGenerator::default();

        let err = generate_sql(&table, "LOC-1", &mut ids).unwrap_err();
        let missing = err.downcast_ref::<MissingColumns>().unwrap();
        assert!(missing.0.contains(&"spice_level".to_string()));
        assert!(!missing.0.contains(&"item_id".to_string()));
    }

    #[test]
    fn test_generate_sql_rerun_replaces_rather_than_appends() {
        let (table, _) = menu_table(&[
            &["I1", "Samosa", "", "", "", "", "Hot", "", "Lassi"],
            &["I2", "Lassi", "", "", "", "", "Mild", "", ""],
        ]);

        let mut ids = SequentialGenerator::default();
        let first = generate_sql(&table, "LOC-1", &mut ids).unwrap();
        let mut ids = SequentialGenerator::default();
        let second = generate_sql(&table, "LOC-1", &mut ids).unwrap();

        // Same input and generator state give identical documents, with the
        // DELETE guards in front of both INSERT groups
        assert_eq!(first, second);
        assert!(first.contains("DELETE FROM mh_item_recommendation WHERE item_id IN ('I1');"));
        assert!(first.contains("DELETE FROM mh_item_filter_tag WHERE item_id IN ('I1','I2');"));
    }
}
