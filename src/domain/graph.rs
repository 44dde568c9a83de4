//! Read-only views of the vault consumed by the ancestry resolver.

use crate::domain::NoteId;

/// Read-only view of a vault's link index.
pub trait LinkGraph {
    /// Returns the notes that link to `id`.
    ///
    /// Order carries no meaning and duplicates are allowed; the resolver
    /// sorts and deduplicates candidates itself.
    fn backlinks_of(&self, id: &NoteId) -> Vec<NoteId>;

    /// Returns true if `id` names a note that exists in the vault.
    fn exists(&self, id: &NoteId) -> bool;
}

/// Read-only view of explicitly declared parents.
///
/// Implementations resolve whatever the user wrote (`parent:: [[Name]]`,
/// a frontmatter field, ...) to a concrete note, or return `None`.
pub trait ParentLookup {
    /// Returns the declared parent of `id`, if any.
    fn parent_of(&self, id: &NoteId) -> Option<NoteId>;
}

impl<F> ParentLookup for F
where
    F: Fn(&NoteId) -> Option<NoteId>,
{
    fn parent_of(&self, id: &NoteId) -> Option<NoteId> {
        self(id)
    }
}

/// A `ParentLookup` with no declared parents; ancestry comes from backlinks only.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoParents;

impl ParentLookup for NoParents {
    fn parent_of(&self, _id: &NoteId) -> Option<NoteId> {
        None
    }
}
