//! Vault-relative note identifier with display-name extraction and serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

/// Extension assumed for link paths written without one.
pub const NOTE_EXTENSION: &str = "md";

/// A unique identifier for a note within a vault.
///
/// A `NoteId` is the note's path relative to the vault root, always using `/`
/// as separator and including the file extension. Ordering is lexicographic
/// on that path, which is what ancestry tie-breaks rely on.
///
/// # Examples
///
/// ```
/// use crumbs::domain::NoteId;
///
/// let id: NoteId = "Projects/Alpha.md".parse().unwrap();
/// assert_eq!(id.name(), "Alpha");
/// assert_eq!(id.folder(), Some("Projects"));
///
/// let home = NoteId::from_link_path("Home").unwrap();
/// assert_eq!(home.as_str(), "Home.md");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Creates a NoteId from a vault-relative path string.
    ///
    /// Backslashes are treated as separators, a leading `./` is dropped and
    /// repeated separators collapse. Whitespace is kept: ` Note.md` and
    /// `Note.md` are different files.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteIdError` if the path is blank, absolute, or contains
    /// `.` or `..` segments after normalization.
    pub fn new(path: &str) -> Result<Self, ParseNoteIdError> {
        let unified = path.replace('\\', "/");

        if unified.trim().is_empty() {
            return Err(ParseNoteIdError::new(path, "path cannot be empty"));
        }
        if unified.starts_with('/') {
            return Err(ParseNoteIdError::new(path, "path must be relative to the vault"));
        }

        let mut segments = Vec::new();
        for (i, segment) in unified.split('/').enumerate() {
            match segment {
                "" => continue,
                "." if i == 0 => continue,
                "." | ".." => {
                    return Err(ParseNoteIdError::new(
                        path,
                        "path cannot contain '.' or '..' segments",
                    ));
                }
                s => segments.push(s),
            }
        }

        if segments.is_empty() {
            return Err(ParseNoteIdError::new(path, "path cannot be empty"));
        }

        Ok(Self(segments.join("/")))
    }

    /// Creates a NoteId from a link path, appending `.md` when the final
    /// segment has no extension.
    ///
    /// This is how a configured home note such as `Home` maps onto a file.
    /// Surrounding whitespace is not part of a link.
    pub fn from_link_path(link: &str) -> Result<Self, ParseNoteIdError> {
        let id = Self::new(link.trim())?;
        if id.extension().is_some() {
            Ok(id)
        } else {
            Ok(Self(format!("{}.{}", id.0, NOTE_EXTENSION)))
        }
    }

    /// Creates a NoteId from a relative filesystem path (as yielded by the
    /// directory scanner).
    pub fn from_path(path: &Path) -> Result<Self, ParseNoteIdError> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(s) => segments.push(s.to_string_lossy().into_owned()),
                Component::CurDir => continue,
                _ => {
                    return Err(ParseNoteIdError::new(
                        &path.to_string_lossy(),
                        "path must be relative to the vault",
                    ));
                }
            }
        }
        Self::new(&segments.join("/"))
    }

    /// Returns the full vault-relative path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the file name, including extension.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Returns the display name: file name without folders or extension.
    pub fn name(&self) -> &str {
        let file_name = self.file_name();
        match file_name.rfind('.') {
            Some(0) | None => file_name,
            Some(dot) => &file_name[..dot],
        }
    }

    /// Returns the extension of the file name, if any.
    pub fn extension(&self) -> Option<&str> {
        let file_name = self.file_name();
        match file_name.rfind('.') {
            Some(0) | None => None,
            Some(dot) => Some(&file_name[dot + 1..]),
        }
    }

    /// Returns the folder containing the note, or `None` at the vault root.
    pub fn folder(&self) -> Option<&str> {
        self.0.rfind('/').map(|slash| &self.0[..slash])
    }

    /// Returns the path without its extension (the form used in wiki links).
    pub fn link_path(&self) -> &str {
        match self.extension() {
            Some(ext) => &self.0[..self.0.len() - ext.len() - 1],
            None => &self.0,
        }
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error returned when parsing an invalid note path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    fn new(value: &str, reason: &str) -> Self {
        Self {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note path '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
