//! Spice-level filter tags, item links, and media placeholder rows
//!
//! All three statement groups share one transaction wrapper.

use std::collections::HashMap;

use super::ids::IdGenerator;
use super::recommendations::{distinct_in_order, quote_list};
use super::rows::MenuRow;

/// Distinct spice levels with their freshly assigned tag ids.
///
/// Kept in first-appearance order so the rendered statements are
/// deterministic for a given input and id generator.
#[derive(Debug, Default)]
pub struct TagSet {
    pub tags: Vec<(String, String)>,
    by_name: HashMap<String, String>,
}

impl TagSet {
    /// Collect the distinct non-empty spice levels and assign each a fresh id.
    pub fn collect(rows: &[MenuRow], ids: &mut dyn IdGenerator) -> Self {
        let mut set = TagSet::default();
        for row in rows {
            let level = row.spice_level.as_str();
            if level.is_empty() || set.by_name.contains_key(level) {
                continue;
            }
            let id = ids.next_id();
            set.tags.push((level.to_string(), id.clone()));
            set.by_name.insert(level.to_string(), id);
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn id_for(&self, level: &str) -> Option<&str> {
        self.by_name.get(level).map(|s| s.as_str())
    }
}

/// (item, tag) link pairs, in row order.
pub fn collect_links(rows: &[MenuRow], tags: &TagSet) -> Vec<(String, String)> {
    rows.iter()
        .filter(|row| row.has_item_id())
        .filter_map(|row| {
            tags.id_for(&row.spice_level)
                .map(|tag_id| (row.item_id.clone(), tag_id.to_string()))
        })
        .collect()
}

/// Render the combined tag / link / media block.
pub fn filter_tag_block(
    rows: &[MenuRow],
    location_id: &str,
    ids: &mut dyn IdGenerator,
) -> Vec<String> {
    let tags = TagSet::collect(rows, ids);

    let mut lines = vec![
        "-- Below are queries for Spice Level Tags and their Media".to_string(),
        "START TRANSACTION;".to_string(),
    ];

    if tags.is_empty() {
        lines.push("-- No spice level filter tags to insert.".to_string());
    } else {
        lines.push("-- INSERT for mh_filter_tag (spice levels)".to_string());
        let values = tags
            .tags
            .iter()
            .map(|(name, id)| {
                format!(
                    "('{}', '{}', '{}', '1')",
                    id,
                    location_id,
                    name.replace('\'', "''")
                )
            })
            .collect::<Vec<_>>()
            .join(",\n");
        lines.push(format!(
            "INSERT INTO mh_filter_tag (id, location_id, name, is_food_prep) VALUES\n{};",
            values
        ));
    }

    let links = collect_links(rows, &tags);
    if links.is_empty() {
        lines.push("-- No item-filter tag links found to insert.".to_string());
    } else {
        let item_ids = distinct_in_order(links.iter().map(|(item, _)| item.as_str()));
        lines.push(format!(
            "DELETE FROM mh_item_filter_tag WHERE item_id IN ({});",
            quote_list(&item_ids)
        ));
        lines.push("-- INSERT for mh_item_filter_tag (spice mapping)".to_string());
        let values = links
            .iter()
            .map(|(item, tag)| format!("('{}', '{}')", item, tag))
            .collect::<Vec<_>>()
            .join(",\n");
        lines.push(format!(
            "INSERT INTO mh_item_filter_tag (item_id, filter_tag_id) VALUES\n{};",
            values
        ));
    }

    if tags.is_empty() {
        lines.push("-- No media entries to create for spice level tags.".to_string());
    } else {
        lines.push("-- INSERT for mh_media (spice level filter images)".to_string());
        for (_, id) in &tags.tags {
            lines.push(format!(
                "INSERT INTO `mh_media` (`id`, `entity_type`, `entity_id`, `file_name`, `mime_type`) \
                 VALUES ('{}', 'FILTER', '{}', '{}.png', 'image/png');",
                id, id, id
            ));
        }
    }

    lines.push("COMMIT;".to_string());
    lines
}
