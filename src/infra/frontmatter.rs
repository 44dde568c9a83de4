//! Frontmatter parser for extracting YAML metadata from markdown files.
//!
//! Frontmatter is optional in a vault: a note without it is all body.

use serde_yaml::Mapping;
use thiserror::Error;

/// Metadata read from a note's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// The `parent` field as written, before link resolution.
    pub parent: Option<String>,
}

/// Result of parsing a markdown file with optional frontmatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNote {
    pub frontmatter: Frontmatter,
    pub body: String,
}

/// Errors during frontmatter parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Parses markdown content with optional YAML frontmatter.
///
/// # Format
/// ```text
/// ---
/// parent: "[[Projects]]"
/// ---
/// Body content here...
/// ```
///
/// The `parent` field may be a string, a list (first entry wins), or an
/// unquoted wiki link, which YAML reads as a nested list.
///
/// # Errors
///
/// Returns `ParseError::InvalidYaml` if a frontmatter block is present but
/// is not a valid YAML mapping.
pub fn parse(content: &str) -> Result<ParsedNote, ParseError> {
    let (yaml, body) = split(content);

    let frontmatter = match yaml {
        Some(yaml) if !is_blank_yaml(yaml) => {
            let mapping: Mapping = serde_yaml::from_str(yaml)?;
            Frontmatter {
                parent: parent_value(&mapping).and_then(first_scalar),
            }
        }
        _ => Frontmatter::default(),
    };

    Ok(ParsedNote {
        frontmatter,
        body: body.to_string(),
    })
}

/// Splits content into the YAML between `---` delimiters and the body.
///
/// Returns `(None, content)` when the content does not open with a `---`
/// line or the block is never closed.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let after_opening = if content.starts_with("---\r\n") {
        5
    } else if content.starts_with("---\n") {
        4
    } else {
        return (None, content);
    };

    let yaml_and_rest = &content[after_opening..];
    let Some(closing_pos) = find_closing_delimiter(yaml_and_rest) else {
        return (None, content);
    };

    let yaml = &yaml_and_rest[..closing_pos];
    let after_closing = &yaml_and_rest[closing_pos..];
    let body_offset = if after_closing.starts_with("---\r\n") {
        5
    } else if after_closing.starts_with("---\n") {
        4
    } else {
        3
    };

    (Some(yaml), &after_closing[body_offset..])
}

/// Finds the position of the closing `---` delimiter.
///
/// The closing delimiter must appear at the start of a line and be exactly
/// `---` followed by a newline or EOF.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if content[pos..].starts_with("---") {
            let after = pos + 3;
            if after >= bytes.len()
                || bytes[after] == b'\n'
                || (bytes[after] == b'\r' && bytes.get(after + 1) == Some(&b'\n'))
            {
                return Some(pos);
            }
        }

        match content[pos..].find('\n') {
            Some(newline_offset) => pos += newline_offset + 1,
            None => break,
        }
    }

    None
}

fn is_blank_yaml(yaml: &str) -> bool {
    yaml.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// Returns the value of the first key spelled `parent` in any case.
fn parent_value(mapping: &Mapping) -> Option<&serde_yaml::Value> {
    mapping
        .iter()
        .find(|(key, _)| key.as_str().is_some_and(|k| k.eq_ignore_ascii_case("parent")))
        .map(|(_, value)| value)
}

/// Returns the first string-like scalar, descending into lists.
fn first_scalar(value: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Sequence(items) => items.iter().find_map(first_scalar),
        Value::Tagged(tagged) => first_scalar(&tagged.value),
        _ => None,
    }
}
