//! Pairing recommendation resolution and DELETE/INSERT emission

use std::collections::{HashMap, HashSet};

use super::rows::MenuRow;

/// One resolved recommendation edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub item_id: String,
    pub recommended_item_id: String,
}

/// Result of scanning the table for recommendations: the edges in discovery
/// order plus the row-local diagnostics collected along the way.
#[derive(Debug, Default)]
pub struct ResolvedRecommendations {
    pub edges: Vec<Edge>,
    pub diagnostics: Vec<String>,
}

/// Build the item name -> item id lookup.
///
/// Explicit forward pass in input row order, later duplicates overwrite
/// earlier ones. Rows without an item id never contribute.
pub fn name_lookup(rows: &[MenuRow]) -> HashMap<String, String> {
    let mut lookup = HashMap::new();
    for row in rows {
        if row.has_item_id() && !row.item_name.is_empty() {
            lookup.insert(row.item_name.clone(), row.item_id.clone());
        }
    }
    lookup
}

/// Resolve every row's `pairing_recommendation` list against the lookup.
///
/// Unresolved names are dropped with a warning; rows with no recommendations
/// contribute nothing silently.
pub fn resolve(rows: &[MenuRow]) -> ResolvedRecommendations {
    let lookup = name_lookup(rows);
    let mut resolved = ResolvedRecommendations::default();

    for row in rows {
        if !row.has_item_id() {
            resolved.diagnostics.push(format!(
                "-- Skipping recommendations for row {}: Missing base item_id",
                row.sheet_row
            ));
            continue;
        }

        let rec_list = row.pairing_recommendation.trim();
        if rec_list.is_empty() {
            continue;
        }

        for name in rec_list.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            match lookup.get(name) {
                Some(id) => resolved.edges.push(Edge {
                    item_id: row.item_id.clone(),
                    recommended_item_id: id.clone(),
                }),
                None => {
                    log::warn!("Unresolved recommendation '{}' for item '{}'", name, row.item_id);
                    resolved.diagnostics.push(format!(
                        "-- Warning: Recommendation '{}' for item_id '{}' not found in the source data.",
                        name, row.item_id
                    ));
                }
            }
        }
    }

    resolved
}

/// Render the recommendation block: diagnostics, then a DELETE covering the
/// distinct source items (replace-on-rerun) and one multi-row INSERT.
pub fn recommendation_block(rows: &[MenuRow]) -> Vec<String> {
    let resolved = resolve(rows);

    let mut lines = vec![
        "-- Below are INSERT queries for mh_item_recommendation".to_string(),
        "START TRANSACTION;".to_string(),
    ];
    lines.extend(resolved.diagnostics.iter().cloned());

    if resolved.edges.is_empty() {
        lines.push("-- No valid item recommendations found to insert.".to_string());
    } else {
        let sources = distinct_in_order(resolved.edges.iter().map(|e| e.item_id.as_str()));
        lines.push(format!(
            "DELETE FROM mh_item_recommendation WHERE item_id IN ({});",
            quote_list(&sources)
        ));

        let values = resolved
            .edges
            .iter()
            .map(|e| format!("('{}', '{}')", e.item_id, e.recommended_item_id))
            .collect::<Vec<_>>()
            .join(",\n");
        lines.push(format!(
            "INSERT INTO mh_item_recommendation (item_id, recommended_item_id) VALUES\n{};",
            values
        ));
    }

    lines.push("COMMIT;".to_string());
    lines
}

/// Deduplicate while keeping first-seen order.
pub fn distinct_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item) {
            out.push(item.to_string());
        }
    }
    out
}

/// Render a list of ids as `'a','b','c'` for an IN clause.
pub fn quote_list(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("'{}'", i))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::rows::extract_rows;
    use crate::pipeline::test_support::menu_table;

    fn rows_from(data: &[&[&str]]) -> Vec<MenuRow> {
        let (table, layout) = menu_table(data);
        extract_rows(&table, &layout)
    }

    /// Row with only the fields this module reads: id, name, recommendations.
    fn rec_rows(data: &[(&str, &str, &str)]) -> Vec<MenuRow> {
        let full: Vec<Vec<&str>> = data
            .iter()
            .map(|(id, name, recs)| vec![*id, *name, "", "", "", "", "", "", *recs])
            .collect();
        let full: Vec<&[&str]> = full.iter().map(|r| r.as_slice()).collect();
        rows_from(&full)
    }

    #[test]
    fn test_name_lookup_last_write_wins() {
        let rows = rec_rows(&[("I1", "Samosa", ""), ("I2", "Samosa", "")]);

        let lookup = name_lookup(&rows);
        assert_eq!(lookup.get("Samosa"), Some(&"I2".to_string()));
    }

    #[test]
    fn test_name_lookup_skips_rows_without_id() {
        let rows = rec_rows(&[("", "Samosa", ""), ("I2", "Lassi", "")]);

        let lookup = name_lookup(&rows);
        assert!(!lookup.contains_key("Samosa"));
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn test_resolve_drops_unknown_names_with_warning() {
        let rows = rec_rows(&[("A", "Item A", "Item B, Item C"), ("B", "Item B", "")]);

        let resolved = resolve(&rows);
        assert_eq!(
            resolved.edges,
            vec![Edge {
                item_id: "A".to_string(),
                recommended_item_id: "B".to_string(),
            }]
        );
        assert_eq!(resolved.diagnostics.len(), 1);
        assert!(resolved.diagnostics[0].contains("'Item C'"));
        assert!(resolved.diagnostics[0].contains("'A'"));
    }

    #[test]
    fn test_block_delete_precedes_insert() {
        let rows = rec_rows(&[("A", "Item A", "Item B"), ("B", "Item B", "Item A")]);

        let lines = recommendation_block(&rows);
        let delete_pos = lines.iter().position(|l| l.starts_with("DELETE")).unwrap();
        let insert_pos = lines.iter().position(|l| l.starts_with("INSERT")).unwrap();
        assert!(delete_pos < insert_pos);
        assert_eq!(
            lines[delete_pos],
            "DELETE FROM mh_item_recommendation WHERE item_id IN ('A','B');"
        );
        assert!(lines[insert_pos].ends_with("('A', 'B'),\n('B', 'A');"));
    }

    #[test]
    fn test_block_without_edges_emits_comment_only() {
        let rows = rec_rows(&[("A", "Item A", "")]);

        let lines = recommendation_block(&rows);
        assert!(lines.contains(&"-- No valid item recommendations found to insert.".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("DELETE")));
        assert!(!lines.iter().any(|l| l.starts_with("INSERT")));
    }

    #[test]
    fn test_distinct_in_order() {
        let items = ["b", "a", "b", "c", "a"];
        assert_eq!(
            distinct_in_order(items.iter().copied()),
            vec!["b".to_string(), "a".to_string(), "c".to_string()]
        );
    }
}
