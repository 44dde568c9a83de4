//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Ancestry, NoteId, StopReason};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Absolute file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: String,
    pub name: String,
}

impl From<&NoteId> for NoteListing {
    fn from(id: &NoteId) -> Self {
        Self {
            id: id.to_string(),
            name: id.name().to_string(),
        }
    }
}

/// A resolved breadcrumb trail.
#[derive(Debug, Serialize)]
pub struct TrailListing {
    pub note: String,
    pub trail: Vec<NoteListing>,
    pub ambiguities: Vec<String>,
    pub stop: StopReason,
}

impl TrailListing {
    pub fn new(note: &NoteId, ancestry: &Ancestry) -> Self {
        Self {
            note: note.to_string(),
            trail: ancestry.trail.iter().map(NoteListing::from).collect(),
            ambiguities: ancestry.ambiguities.iter().map(NoteId::to_string).collect(),
            stop: ancestry.stop,
        }
    }
}
