//! Resolution of link paths (`[[Name]]`, `folder/Name`, `../Name.md`) to notes.

use std::collections::{BTreeSet, HashMap};

use crate::domain::{NOTE_EXTENSION, NoteId};
use crate::infra::{markdown_link_path, wiki_link_path};

/// Maps link paths to the notes of one vault.
///
/// Resolution order:
/// 1. the exact vault path (with `.md` added when missing),
/// 2. the path relative to the linking note's folder,
/// 3. a case-insensitive match on trailing path segments, where the
///    shortest path wins and ties go to the lexicographically smallest.
#[derive(Debug, Default, Clone)]
pub struct LinkResolver {
    ids: BTreeSet<NoteId>,
    by_name: HashMap<String, Vec<NoteId>>,
}

impl LinkResolver {
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = NoteId>,
    {
        let ids: BTreeSet<NoteId> = ids.into_iter().collect();
        let mut by_name: HashMap<String, Vec<NoteId>> = HashMap::new();
        for id in &ids {
            by_name
                .entry(id.name().to_lowercase())
                .or_default()
                .push(id.clone());
        }
        Self { ids, by_name }
    }

    /// Resolves a link path written in `source` (or at the vault root when
    /// `source` is `None`).
    pub fn resolve(&self, link: &str, source: Option<&NoteId>) -> Option<NoteId> {
        let link = link.trim();
        if link.is_empty() {
            return None;
        }

        self.exact(link)
            .or_else(|| source.and_then(|s| self.relative(link, s)))
            .or_else(|| self.by_suffix(link))
    }

    fn exact(&self, link: &str) -> Option<NoteId> {
        let as_written = NoteId::from_link_path(link).ok();
        let with_extension = NoteId::new(&format!("{link}.{NOTE_EXTENSION}")).ok();

        [as_written, with_extension]
            .into_iter()
            .flatten()
            .find(|id| self.ids.contains(id))
    }

    fn relative(&self, link: &str, source: &NoteId) -> Option<NoteId> {
        let mut segments: Vec<&str> = source
            .folder()
            .map(|f| f.split('/').collect())
            .unwrap_or_default();

        for segment in link.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop()?;
                }
                s => segments.push(s),
            }
        }

        self.exact(&segments.join("/"))
    }

    fn by_suffix(&self, link: &str) -> Option<NoteId> {
        let wanted = strip_note_extension(link).to_lowercase();
        let wanted: Vec<&str> = wanted
            .split('/')
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .collect();
        let name = wanted.last()?;

        self.by_name
            .get(*name)?
            .iter()
            .filter(|id| {
                let path = id.link_path().to_lowercase();
                let segments: Vec<&str> = path.split('/').collect();
                segments.ends_with(&wanted)
            })
            .min_by(|a, b| {
                a.as_str()
                    .len()
                    .cmp(&b.as_str().len())
                    .then_with(|| a.cmp(b))
            })
            .cloned()
    }
}

/// Removes link syntax from a declared parent value.
///
/// `[[Name|alias]]`, `[text](Name.md)`, `"Name"` and `Name` all become the
/// bare link path.
pub fn strip_link_syntax(raw: &str) -> String {
    let raw = raw.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();

    if let Some(inner) = raw
        .strip_prefix("!")
        .unwrap_or(raw)
        .strip_prefix("[[")
        .and_then(|r| r.strip_suffix("]]"))
    {
        return wiki_link_path(inner);
    }

    if raw.starts_with('[') && raw.ends_with(')') {
        if let Some(open) = raw.find("](") {
            return markdown_link_path(&raw[open + 2..raw.len() - 1]);
        }
    }

    wiki_link_path(raw)
}

fn strip_note_extension(link: &str) -> &str {
    let suffix_len = NOTE_EXTENSION.len() + 1;
    if link.len() > suffix_len && link.is_char_boundary(link.len() - suffix_len) {
        let (stem, ext) = link.split_at(link.len() - suffix_len);
        if ext.eq_ignore_ascii_case(".md") {
            return stem;
        }
    }
    link
}
