//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::{DEFAULT_HOME, DEFAULT_MAX_DEPTH, Settings, SettingsError};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default vault directory
    pub dir: Option<PathBuf>,

    /// Home note link path
    pub home: Option<String>,

    /// Maximum trail length
    pub max_depth: Option<usize>,

    /// End trails with the note itself
    pub include_self: Option<bool>,

    /// Print a notice when ancestry is ambiguous
    pub warn_on_ambiguity: Option<bool>,

    /// Separator between breadcrumbs
    pub separator: Option<String>,
}

/// Per-invocation values from the command line; each wins over the config file.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub home: Option<String>,
    pub max_depth: Option<usize>,
    pub include_self: Option<bool>,
    pub no_warn: bool,
    pub separator: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/crumbs/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("crumbs")
            .join("config.toml")
    }

    /// Resolve the vault directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Current working directory
    pub fn vault_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Builds resolution settings: command line, then config file, then defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` when the home note is blank or malformed or the
    /// depth is zero.
    pub fn settings(&self, overrides: &SettingsOverrides) -> Result<Settings, SettingsError> {
        let home = overrides
            .home
            .as_deref()
            .or(self.home.as_deref())
            .unwrap_or(DEFAULT_HOME);
        let max_depth = overrides
            .max_depth
            .or(self.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH);

        let mut settings = Settings::validated(home, max_depth)?
            .with_include_self(overrides.include_self.or(self.include_self).unwrap_or(false))
            .with_warn_on_ambiguity(!overrides.no_warn && self.warn_on_ambiguity.unwrap_or(true));

        if let Some(separator) = overrides.separator.as_ref().or(self.separator.as_ref()) {
            settings = settings.with_separator(separator.clone());
        }
        Ok(settings)
    }
}
