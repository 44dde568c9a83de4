//! Inline `key:: value` fields in note bodies.

use super::links::{code_ranges, in_ranges};

/// A `key:: value` line found in a note body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineField {
    /// Lowercased key.
    pub key: String,
    pub value: String,
}

/// Extracts inline fields from a body, one per line.
///
/// A field line may start with a list marker (`-`, `*`, `+`). Keys are
/// compared case-insensitively; lines inside code are skipped, as are
/// fields with an empty value.
pub fn extract_fields(body: &str) -> Vec<InlineField> {
    let code = code_ranges(body);
    let mut fields = Vec::new();
    let mut offset = 0;

    for line in body.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        if in_ranges(&code, start + (line.len() - line.trim_start().len())) {
            continue;
        }
        if let Some(field) = parse_field_line(line) {
            fields.push(field);
        }
    }

    fields
}

/// Returns the first `parent::` value in the body, if any.
pub fn inline_parent(body: &str) -> Option<String> {
    extract_fields(body)
        .into_iter()
        .find(|f| f.key == "parent")
        .map(|f| f.value)
}

fn parse_field_line(line: &str) -> Option<InlineField> {
    let line = line.trim();
    let line = ["- ", "* ", "+ "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .unwrap_or(line)
        .trim_start();

    let (key, value) = line.split_once("::")?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() || !key.chars().all(is_key_char) {
        return None;
    }

    Some(InlineField {
        key: key.to_lowercase(),
        value: value.to_string(),
    })
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == ' '
}
