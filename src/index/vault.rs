//! In-memory index of a vault: notes, resolved links and declared parents.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{LinkGraph, NoteId, ParentLookup};

#[derive(Debug, Default, Clone)]
struct NoteEntry {
    links: BTreeSet<NoteId>,
    parent: Option<NoteId>,
    declared_parent: Option<String>,
    unreadable: Option<String>,
}

/// Link graph and parent metadata for every note of a vault.
///
/// Built by [`IndexBuilder`](crate::index::IndexBuilder) from disk, or by
/// hand with [`insert_note`](Self::insert_note),
/// [`add_link`](Self::add_link) and [`set_parent`](Self::set_parent).
#[derive(Debug, Default, Clone)]
pub struct VaultIndex {
    notes: BTreeMap<NoteId, NoteEntry>,
    backlinks: BTreeMap<NoteId, BTreeSet<NoteId>>,
}

impl VaultIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note. Adding a note twice keeps its existing links and metadata.
    pub fn insert_note(&mut self, id: NoteId) {
        self.notes.entry(id).or_default();
    }

    /// Records that `from` links to `to`.
    ///
    /// Neither note has to exist; links from missing notes are kept and
    /// filtered by the resolver.
    pub fn add_link(&mut self, from: NoteId, to: NoteId) {
        if let Some(entry) = self.notes.get_mut(&from) {
            entry.links.insert(to.clone());
        }
        self.backlinks.entry(to).or_default().insert(from);
    }

    /// Sets the resolved parent of `child`, adding `child` if needed.
    pub fn set_parent(&mut self, child: NoteId, parent: NoteId) {
        self.notes.entry(child).or_default().parent = Some(parent);
    }

    /// Records the parent value as written in `child`, before resolution.
    pub fn set_declared_parent(&mut self, child: NoteId, declared: impl Into<String>) {
        self.notes.entry(child).or_default().declared_parent = Some(declared.into());
    }

    /// Marks `id` as unreadable. The note still exists in the index.
    pub fn mark_unreadable(&mut self, id: NoteId, reason: impl Into<String>) {
        self.notes.entry(id).or_default().unreadable = Some(reason.into());
    }

    /// Returns all notes, sorted.
    pub fn notes(&self) -> impl Iterator<Item = &NoteId> {
        self.notes.keys()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the resolved outgoing links of `id`, sorted.
    pub fn links_of(&self, id: &NoteId) -> Vec<NoteId> {
        self.notes
            .get(id)
            .map(|e| e.links.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the parent value as written in the note, if any.
    pub fn declared_parent(&self, id: &NoteId) -> Option<&str> {
        self.notes.get(id)?.declared_parent.as_deref()
    }

    /// Returns the declared parent value when it matches no note.
    pub fn unresolved_parent(&self, id: &NoteId) -> Option<&str> {
        let entry = self.notes.get(id)?;
        match entry.parent {
            Some(_) => None,
            None => entry.declared_parent.as_deref(),
        }
    }

    /// Returns why `id` could not be read, if it could not.
    pub fn unreadable_reason(&self, id: &NoteId) -> Option<&str> {
        self.notes.get(id)?.unreadable.as_deref()
    }

    /// Returns every unreadable note with its reason.
    pub fn unreadable(&self) -> impl Iterator<Item = (&NoteId, &str)> {
        self.notes
            .iter()
            .filter_map(|(id, e)| e.unreadable.as_deref().map(|r| (id, r)))
    }

    /// Finds notes whose display name matches `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Vec<NoteId> {
        let wanted = name.to_lowercase();
        self.notes
            .keys()
            .filter(|id| id.name().to_lowercase() == wanted)
            .cloned()
            .collect()
    }
}

impl LinkGraph for VaultIndex {
    fn backlinks_of(&self, id: &NoteId) -> Vec<NoteId> {
        self.backlinks
            .get(id)
            .map(|sources| sources.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn exists(&self, id: &NoteId) -> bool {
        self.notes.contains_key(id)
    }
}

impl ParentLookup for VaultIndex {
    fn parent_of(&self, id: &NoteId) -> Option<NoteId> {
        self.notes.get(id)?.parent.clone()
    }
}
