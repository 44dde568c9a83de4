//! Text rendering of breadcrumb trails

use crate::domain::NoteId;

/// Joins the display names of a trail with ` {separator} `.
///
/// Surrounding whitespace of a visible separator is dropped so `"/"` and
/// `" / "` render alike. A separator made only of whitespace is used as is.
///
/// ```
/// use crumbs::domain::NoteId;
/// use crumbs::render::render_strip;
///
/// let trail: Vec<NoteId> = ["Home.md", "Areas/Root.md", "Mid.md"]
///     .iter()
///     .map(|p| p.parse().unwrap())
///     .collect();
/// assert_eq!(render_strip(&trail, "→"), "Home → Root → Mid");
/// ```
pub fn render_strip(trail: &[NoteId], separator: &str) -> String {
    let visible = separator.trim();
    let joiner = if visible.is_empty() {
        separator.to_string()
    } else {
        format!(" {visible} ")
    };
    trail
        .iter()
        .map(NoteId::name)
        .collect::<Vec<_>>()
        .join(&joiner)
}

/// Message shown when a note's ancestry had to be guessed.
pub fn ambiguity_notice(note: &NoteId) -> String {
    format!(
        "the ancestry for \"{}\" is ambiguous; specify it with parent:: <name of note>",
        note.name()
    )
}
