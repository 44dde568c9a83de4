//! Index builder: scans a vault directory into a [`VaultIndex`].

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::domain::NoteId;
use crate::index::{LinkResolver, VaultIndex, strip_link_syntax};
use crate::infra::{
    FsError, extract_links, inline_parent, parse, read_note_text, scan_notes_directory, split,
};

// ===========================================
// BuildError Type
// ===========================================

/// Problems with individual files found while indexing.
#[derive(Debug)]
pub enum BuildError {
    /// Frontmatter is malformed; body links were still indexed.
    Parse { path: PathBuf, message: String },
    /// I/O error reading file.
    Io { path: PathBuf, message: String },
    /// Encoding error (UTF-16, lone CR, etc.).
    Encoding { path: PathBuf, message: String },
    /// The file path cannot be used as a note identifier.
    Path { path: PathBuf, message: String },
}

impl BuildError {
    /// Returns the path of the file that caused the error.
    pub fn path(&self) -> &Path {
        match self {
            BuildError::Parse { path, .. }
            | BuildError::Io { path, .. }
            | BuildError::Encoding { path, .. }
            | BuildError::Path { path, .. } => path,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        match self {
            BuildError::Parse { message, .. }
            | BuildError::Io { message, .. }
            | BuildError::Encoding { message, .. }
            | BuildError::Path { message, .. } => message,
        }
    }

    /// Returns true if the note was indexed despite the problem.
    pub fn is_warning(&self) -> bool {
        matches!(self, BuildError::Parse { .. })
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path().display(), self.message())
    }
}

impl std::error::Error for BuildError {}

// ===========================================
// Result Types
// ===========================================

/// Result of indexing a vault.
#[derive(Debug)]
pub struct BuildResult {
    /// The built index.
    pub index: VaultIndex,
    /// Number of notes read successfully.
    pub indexed: usize,
    /// Problems with individual files, warnings included.
    pub errors: Vec<BuildError>,
}

impl BuildResult {
    /// Returns the number of files that could not be read.
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| !e.is_warning()).count()
    }
}

// ===========================================
// Progress Reporting
// ===========================================

/// Result of processing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileResult {
    /// File was indexed successfully.
    Indexed,
    /// File was indexed but part of it was ignored.
    Warning(String),
    /// File could not be read.
    Error(String),
}

/// Trait for receiving progress updates while indexing.
pub trait ProgressReporter {
    /// Called when a file is processed.
    fn on_file(&mut self, path: &Path, result: FileResult);
    /// Called when the build is complete.
    fn on_complete(&mut self, indexed: usize, errors: usize);
}

/// A no-op progress reporter.
#[derive(Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_file(&mut self, _path: &Path, _result: FileResult) {}
    fn on_complete(&mut self, _indexed: usize, _errors: usize) {}
}

// ===========================================
// IndexBuilder
// ===========================================

/// Builds a [`VaultIndex`] from the markdown files under a directory.
///
/// Indexing runs in two passes: the first collects every note so that the
/// second can resolve links and declared parents against the full vault.
pub struct IndexBuilder {
    vault_dir: PathBuf,
}

struct ScannedNote {
    id: NoteId,
    path: PathBuf,
    content: String,
}

impl IndexBuilder {
    pub fn new(vault_dir: impl Into<PathBuf>) -> Self {
        Self {
            vault_dir: vault_dir.into(),
        }
    }

    /// Returns the vault directory.
    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    /// Indexes the vault.
    ///
    /// # Errors
    ///
    /// Returns an error if the vault directory cannot be scanned. Problems
    /// with individual files are collected in the returned `BuildResult`.
    pub fn build(&self) -> Result<BuildResult, FsError> {
        self.build_with_progress(&mut NoopReporter)
    }

    /// Indexes the vault with progress reporting.
    pub fn build_with_progress<P: ProgressReporter>(
        &self,
        progress: &mut P,
    ) -> Result<BuildResult, FsError> {
        let mut index = VaultIndex::new();
        let mut errors = Vec::new();
        let mut scanned = Vec::new();

        for relative_path in scan_notes_directory(&self.vault_dir)? {
            let id = match NoteId::from_path(&relative_path) {
                Ok(id) => id,
                Err(e) => {
                    report(
                        progress,
                        &mut errors,
                        BuildError::Path {
                            path: relative_path,
                            message: e.to_string(),
                        },
                    );
                    continue;
                }
            };

            index.insert_note(id.clone());
            match read_note_text(&self.vault_dir.join(&relative_path)) {
                Ok(content) => scanned.push(ScannedNote {
                    id,
                    path: relative_path,
                    content,
                }),
                Err(e) => {
                    let error = fs_error_to_build_error(e, &relative_path);
                    index.mark_unreadable(id, error.message());
                    report(progress, &mut errors, error);
                }
            }
        }

        let resolver = LinkResolver::new(index.notes().cloned());
        let indexed = scanned.len();

        for note in scanned {
            let (parent, body, problem) = match parse(&note.content) {
                Ok(parsed) => (parsed.frontmatter.parent, parsed.body, None),
                Err(e) => (None, split(&note.content).1.to_string(), Some(e.to_string())),
            };

            for link in extract_links(&body) {
                match resolver.resolve(&link.target, Some(&note.id)) {
                    Some(target) => index.add_link(note.id.clone(), target),
                    None => debug!("{}: unresolved link '{}'", note.id, link.target),
                }
            }

            if let Some(declared) = parent.or_else(|| inline_parent(&body)) {
                let target = resolver.resolve(&strip_link_syntax(&declared), Some(&note.id));
                match target {
                    Some(target) => index.set_parent(note.id.clone(), target),
                    None => debug!("{}: declared parent '{}' not found", note.id, declared),
                }
                index.set_declared_parent(note.id.clone(), declared);
            }

            match problem {
                None => progress.on_file(&note.path, FileResult::Indexed),
                Some(message) => {
                    index.mark_unreadable(note.id.clone(), message.clone());
                    report(
                        progress,
                        &mut errors,
                        BuildError::Parse {
                            path: note.path,
                            message,
                        },
                    );
                }
            }
        }

        info!(
            "indexed {} of {} notes in {}",
            indexed,
            index.len(),
            self.vault_dir.display()
        );

        let result = BuildResult {
            index,
            indexed,
            errors,
        };
        progress.on_complete(result.indexed, result.error_count());
        Ok(result)
    }
}

// ===========================================
// Helper Functions
// ===========================================

fn report<P: ProgressReporter>(progress: &mut P, errors: &mut Vec<BuildError>, error: BuildError) {
    warn!("{}", error);
    let result = if error.is_warning() {
        FileResult::Warning(error.message().to_string())
    } else {
        FileResult::Error(error.message().to_string())
    };
    progress.on_file(error.path(), result);
    errors.push(error);
}

fn fs_error_to_build_error(error: FsError, path: &Path) -> BuildError {
    match error {
        FsError::InvalidEncoding { encoding, .. } => BuildError::Encoding {
            path: path.to_path_buf(),
            message: encoding,
        },
        e => BuildError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    }
}
