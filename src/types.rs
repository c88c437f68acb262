use std::collections::HashMap;

use serde::Serialize;

/// Parsed GUANO metadata fields from one WAV file.
///
/// Keys are unique; a field repeated in the source text keeps the value of
/// its last occurrence. Iteration order carries no meaning — use
/// [`sorted_fields`](GuanoMetadata::sorted_fields) for stable display.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct GuanoMetadata {
    pub fields: HashMap<String, String>,
}

impl GuanoMetadata {
    /// Look up a field value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields ordered by key.
    pub fn sorted_fields(&self) -> Vec<(&str, &str)> {
        let mut fields: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        fields.sort_unstable();
        fields
    }
}
