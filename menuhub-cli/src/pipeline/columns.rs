//! Header normalization and required-column validation

use std::collections::HashMap;

/// Logical columns the pipeline needs, post-normalization.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "item_id",
    "item_name",
    "average_preparation_time",
    "is_kids_friendly",
    "special_instruction",
    "allergic_information",
    "spice_level",
    "ingredients",
    "pairing_recommendation",
];

/// Fatal error: required logical columns absent after header cleaning.
///
/// This is the only condition that halts the whole run; everything else is
/// row-local and becomes a comment in the output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumns(pub Vec<String>);

impl std::fmt::Display for MissingColumns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Missing required columns after cleaning: {}. Check your spreadsheet headers.",
            self.0.join(", ")
        )
    }
}

impl std::error::Error for MissingColumns {}

/// Normalized header row plus a logical-name -> column-index lookup.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    /// Headers exactly as they appeared in the file (for diagnostics)
    pub original: Vec<String>,
    /// Headers after trim/lower-case/underscore cleaning, same order
    pub cleaned: Vec<String>,
    index: HashMap<String, usize>,
}

impl ColumnLayout {
    /// Clean the raw header row and verify every required logical column is
    /// present. Later duplicates of a header shadow earlier ones.
    pub fn from_headers(headers: &[String]) -> Result<Self, MissingColumns> {
        let cleaned: Vec<String> = headers.iter().map(|h| clean_header(h)).collect();

        let mut index = HashMap::new();
        for (i, name) in cleaned.iter().enumerate() {
            index.insert(name.clone(), i);
        }

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !index.contains_key(**c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(MissingColumns(missing));
        }

        Ok(Self {
            original: headers.to_vec(),
            cleaned,
            index,
        })
    }

    /// Column index for a cleaned logical name.
    pub fn position(&self, logical: &str) -> Option<usize> {
        self.index.get(logical).copied()
    }
}

/// Trim, lower-case, and replace interior spaces with underscores.
pub fn clean_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}
