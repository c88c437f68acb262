//! Line-oriented GUANO text decoding.

use std::collections::HashMap;

use crate::error::{GuanoError, Result};
use crate::types::GuanoMetadata;

/// Parse GUANO metadata text into key/value fields.
///
/// Records are newline-separated `key: value` lines. Each line is trimmed
/// of surrounding whitespace and NUL padding; blank lines are skipped. The
/// split happens at the first colon, so values may themselves contain
/// colons. A duplicated key keeps the value from its last occurrence. Input
/// with no records at all parses to an empty field set.
pub fn parse_guano_text(text: &str) -> Result<GuanoMetadata> {
    let mut fields = HashMap::new();
    for raw in text.lines() {
        let line = raw.trim_matches([' ', '\t', '\r', '\0']);
        if line.is_empty() {
            continue;
        }
        let (key, value) = match line.split_once(':') {
            Some((key, value)) if !key.is_empty() => (key, value),
            _ => return Err(GuanoError::MalformedField(line.to_string())),
        };
        fields.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(GuanoMetadata { fields })
}
