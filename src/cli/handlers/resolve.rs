//! Note resolution utilities.

use crate::domain::{LinkGraph, NoteId};
use crate::index::VaultIndex;

/// Result of resolving a note identifier.
#[derive(Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Exactly one note matched.
    Unique(NoteId),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<NoteId>),
    /// No notes matched.
    NotFound,
}

/// Prints the candidates of an ambiguous identifier so the user can pick one.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[NoteId]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {}", note);
    }
    eprintln!();
    eprintln!("Use the note's path to specify which one you mean.");
}

/// Resolves a note identifier typed by the user.
///
/// Resolution order:
/// 1. Exact vault path (`dir/Note.md`)
/// 2. Vault path without extension (`dir/Note`)
/// 3. Display name, ignoring case (`note`)
pub fn resolve_note(index: &VaultIndex, identifier: &str) -> ResolveResult {
    let identifier = identifier.trim();

    let by_path = [NoteId::new(identifier), NoteId::from_link_path(identifier)]
        .into_iter()
        .flatten()
        .find(|id| index.exists(id));
    if let Some(id) = by_path {
        return ResolveResult::Unique(id);
    }

    let name = identifier.strip_suffix(".md").unwrap_or(identifier);
    if name.contains('/') {
        return ResolveResult::NotFound;
    }
    let mut candidates = index.find_by_name(name);

    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(candidates.remove(0)),
        _ => ResolveResult::Ambiguous(candidates),
    }
}
