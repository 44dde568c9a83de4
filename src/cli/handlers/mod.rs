//! Command handlers for the CLI.

mod backlinks;
mod check;
mod completions;
mod resolve;
mod trail;


use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::domain::{NoteId, Settings};
use crate::index::{FileResult, IndexBuilder, LinkResolver, ProgressReporter, VaultIndex};

// Re-export public items
pub use backlinks::handle_backlinks;
pub use check::handle_check;
pub use completions::handle_completions;
pub use resolve::{ResolveResult, resolve_note};
pub use trail::handle_trail;

use resolve::print_ambiguous_notes;

// ===========================================
// Shared Utilities
// ===========================================

/// Progress reporter that prints to stderr.
pub(crate) struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub(crate) fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn on_file(&mut self, path: &Path, result: FileResult) {
        if self.verbose {
            match result {
                FileResult::Indexed => eprintln!("  indexed: {}", path.display()),
                FileResult::Warning(msg) => eprintln!("  warning: {}: {}", path.display(), msg),
                FileResult::Error(msg) => eprintln!("  error: {}: {}", path.display(), msg),
            }
        }
    }

    fn on_complete(&mut self, indexed: usize, errors: usize) {
        if !self.verbose {
            return;
        }
        if errors > 0 {
            eprintln!("Indexed {} notes with {} errors", indexed, errors);
        } else {
            eprintln!("Indexed {} notes", indexed);
        }
    }
}

/// Scans the vault into an in-memory index.
pub(crate) fn load_vault(vault_dir: &Path, verbose: bool) -> Result<VaultIndex> {
    let result = IndexBuilder::new(vault_dir)
        .build_with_progress(&mut ConsoleReporter::new(verbose))
        .with_context(|| format!("failed to scan vault at {}", vault_dir.display()))?;
    Ok(result.index)
}

/// Points the home setting at the vault note it names.
///
/// A configured `Home` matches `Index/Home.md` the same way a `[[Home]]`
/// link would. Settings are returned unchanged when nothing matches.
pub(crate) fn locate_home(index: &VaultIndex, settings: Settings) -> Settings {
    let found = LinkResolver::new(index.notes().cloned()).resolve(settings.home().as_str(), None);
    match found {
        Some(home) => settings.with_home(home),
        None => settings,
    }
}

/// Resolves a note argument or fails with a message naming the candidates.
pub(crate) fn require_note(index: &VaultIndex, identifier: &str) -> Result<NoteId> {
    match resolve_note(index, identifier) {
        ResolveResult::Unique(id) => Ok(id),
        ResolveResult::Ambiguous(notes) => {
            print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Returns the absolute file path of a note.
pub(crate) fn note_file_path(vault_dir: &Path, id: &NoteId) -> PathBuf {
    let root = vault_dir
        .canonicalize()
        .unwrap_or_else(|_| vault_dir.to_path_buf());
    root.join(id.as_str())
}
