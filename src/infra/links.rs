//! Link extraction from note bodies.
//!
//! Recognizes wiki links (`[[Note]]`, `[[Note|alias]]`, `![[Note]]`) and
//! markdown links to local files (`[text](Note.md)`). Links inside code
//! blocks and code spans are ignored.

use std::ops::Range;
use std::sync::LazyLock;

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag};
use regex::Regex;

static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[\[([^\[\]\n]+?)\]\]").expect("wiki link pattern is valid")
});

/// How a link was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `[[Note]]`
    Wiki,
    /// `![[Note]]`
    Embed,
    /// `[text](Note.md)`
    Markdown,
}

/// A link found in a note body, not yet resolved to a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLink {
    /// The link path with alias, heading and block parts removed.
    pub target: String,
    pub kind: LinkKind,
}

impl RawLink {
    fn new(target: String, kind: LinkKind) -> Option<Self> {
        if target.is_empty() {
            None
        } else {
            Some(Self { target, kind })
        }
    }
}

/// Extracts links from a note body, in order of appearance.
///
/// Same-note links (`[[#Heading]]`), external URLs and pure anchors are
/// dropped.
pub fn extract_links(body: &str) -> Vec<RawLink> {
    let code = code_ranges(body);
    let mut links: Vec<(usize, RawLink)> = Vec::new();

    for caps in WIKI_LINK.captures_iter(body) {
        let Some(whole) = caps.get(0) else { continue };
        if in_ranges(&code, whole.start()) {
            continue;
        }
        let kind = if caps[1].is_empty() {
            LinkKind::Wiki
        } else {
            LinkKind::Embed
        };
        if let Some(link) = RawLink::new(wiki_link_path(&caps[2]), kind) {
            links.push((whole.start(), link));
        }
    }

    for (event, range) in Parser::new_ext(body, Options::empty()).into_offset_iter() {
        if let Event::Start(Tag::Link(link_type, dest, _)) = event {
            if matches!(link_type, LinkType::Autolink | LinkType::Email) || is_external(&dest) {
                continue;
            }
            if let Some(link) = RawLink::new(markdown_link_path(&dest), LinkKind::Markdown) {
                links.push((range.start, link));
            }
        }
    }

    links.sort_by_key(|(offset, _)| *offset);
    links.into_iter().map(|(_, link)| link).collect()
}

/// Returns the byte ranges of code blocks and code spans in `body`.
pub(crate) fn code_ranges(body: &str) -> Vec<Range<usize>> {
    Parser::new_ext(body, Options::empty())
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            Event::Start(Tag::CodeBlock(_)) | Event::Code(_) => Some(range),
            _ => None,
        })
        .collect()
}

pub(crate) fn in_ranges(ranges: &[Range<usize>], offset: usize) -> bool {
    ranges.iter().any(|r| r.contains(&offset))
}

/// Strips alias, heading and block reference parts from a wiki link body.
///
/// `Note|Alias` and `Note#Heading` both become `Note`; `#Heading` becomes
/// the empty string (a link to the same note).
pub fn wiki_link_path(inner: &str) -> String {
    let path = inner.split('|').next().unwrap_or_default();
    let path = path.split('#').next().unwrap_or_default();
    path.trim().to_string()
}

/// Strips the fragment and angle brackets from a markdown link destination
/// and decodes escaped spaces.
pub fn markdown_link_path(dest: &str) -> String {
    let dest = dest.trim();
    let dest = dest
        .strip_prefix('<')
        .and_then(|d| d.strip_suffix('>'))
        .unwrap_or(dest);
    let path = dest.split('#').next().unwrap_or_default();
    path.replace("%20", " ").trim().to_string()
}

fn is_external(dest: &str) -> bool {
    dest.contains("://") || dest.starts_with("mailto:") || dest.starts_with('#')
}
