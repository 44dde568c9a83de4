//! Resolution settings: home note, depth limit and display options.

use thiserror::Error;

use crate::domain::{NoteId, ParseNoteIdError};

/// Default home note name.
pub const DEFAULT_HOME: &str = "Home";

/// Default maximum trail length.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Default glyph placed between breadcrumbs.
pub const DEFAULT_SEPARATOR: &str = "→";

/// Errors raised when building settings from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("home note cannot be empty")]
    EmptyHome,

    #[error("invalid home note: {0}")]
    InvalidHome(#[from] ParseNoteIdError),

    #[error("max depth must be a positive integer, got {0}")]
    InvalidMaxDepth(usize),
}

/// Settings consumed by one ancestry resolution.
///
/// `Settings` is immutable once built. The resolver itself accepts any
/// `max_depth`, including zero; [`Settings::validated`] is where user input is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    home: NoteId,
    max_depth: usize,
    include_self: bool,
    warn_on_ambiguity: bool,
    separator: String,
}

impl Settings {
    /// Creates settings with the given home note and defaults for everything else.
    pub fn new(home: NoteId) -> Self {
        Self {
            home,
            max_depth: DEFAULT_MAX_DEPTH,
            include_self: false,
            warn_on_ambiguity: true,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Builds settings from raw user input, rejecting malformed values.
    ///
    /// `home` is a link path (`Home`, `Index/Home`, `Home.md`).
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` for a blank or invalid home and a zero depth.
    pub fn validated(home: &str, max_depth: usize) -> Result<Self, SettingsError> {
        if home.trim().is_empty() {
            return Err(SettingsError::EmptyHome);
        }
        if max_depth == 0 {
            return Err(SettingsError::InvalidMaxDepth(max_depth));
        }
        let home = NoteId::from_link_path(home)?;
        Ok(Self::new(home).with_max_depth(max_depth))
    }

    pub fn with_home(mut self, home: NoteId) -> Self {
        self.home = home;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_include_self(mut self, include_self: bool) -> Self {
        self.include_self = include_self;
        self
    }

    pub fn with_warn_on_ambiguity(mut self, warn: bool) -> Self {
        self.warn_on_ambiguity = warn;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The note at which resolution stops.
    pub fn home(&self) -> &NoteId {
        &self.home
    }

    /// Maximum trail length, counting the start note when `include_self` is set.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether the trail ends with the start note itself.
    pub fn include_self(&self) -> bool {
        self.include_self
    }

    /// Whether callers should surface ambiguous ancestry to the user.
    pub fn warn_on_ambiguity(&self) -> bool {
        self.warn_on_ambiguity
    }

    /// Glyph placed between rendered breadcrumbs.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for Settings {
    fn default() -> Self {
        let home = NoteId::from_link_path(DEFAULT_HOME).expect("default home is a valid note path");
        Self::new(home)
    }
}
