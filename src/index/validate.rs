//! Vault-wide ancestry checks.

use log::debug;

use crate::domain::{
    AncestryResolver, LinkGraph, NoteId, Settings, StopReason, ValidationIssue, ValidationSummary,
};
use crate::index::VaultIndex;

/// Checks every note of the index.
///
/// Reports unreadable notes and declared parents that match no note as
/// errors. Resolves each note's ancestry and reports notes whose own parent
/// had to be picked among several backlinks, and walks that loop, as
/// warnings.
pub fn validate_vault(index: &VaultIndex, settings: &Settings) -> ValidationSummary {
    let mut summary = ValidationSummary::new();
    let settings = settings.clone().with_include_self(false);
    let resolver = AncestryResolver::new(index, index, &settings);

    for (note, reason) in index.unreadable() {
        summary.add(ValidationIssue::unreadable(note.clone(), reason));
    }

    for note in index.notes() {
        if let Some(declared) = index.unresolved_parent(note) {
            summary.add(ValidationIssue::unresolved_parent(note.clone(), declared));
        }

        let ancestry = resolver.resolve(note);
        debug!("check: {} stops with {}", note, ancestry.stop);

        if ancestry.ambiguities.first() == Some(note) {
            if let Some(chosen) = ancestry.trail.last() {
                let candidates = backlink_count(index, note);
                summary.add(ValidationIssue::ambiguous(
                    note.clone(),
                    chosen.clone(),
                    candidates,
                ));
            }
        }

        if ancestry.stop == StopReason::Cycle {
            let via = ancestry.trail.first().unwrap_or(note).clone();
            summary.add(ValidationIssue::cycle(note.clone(), via));
        }
    }

    summary
}

fn backlink_count(index: &VaultIndex, note: &NoteId) -> usize {
    index
        .backlinks_of(note)
        .iter()
        .filter(|b| *b != note && index.exists(b))
        .count()
}
