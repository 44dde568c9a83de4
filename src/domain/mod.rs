//! Core types: NoteId, Settings, the vault views, and ancestry resolution

mod ancestry;
mod graph;
mod note_id;
mod settings;
mod validation;

pub use ancestry::{Ancestry, AncestryResolver, StopReason, resolve};
pub use graph::{LinkGraph, NoParents, ParentLookup};
pub use note_id::{NOTE_EXTENSION, NoteId, ParseNoteIdError};
pub use settings::{DEFAULT_HOME, DEFAULT_MAX_DEPTH, DEFAULT_SEPARATOR, Settings, SettingsError};
pub use validation::{Severity, ValidationIssue, ValidationKind, ValidationSummary};
