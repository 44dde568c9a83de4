//! Isolated test environment with temp directory.

use super::{CrumbsCommand, TestNote};
use crumbs::index::{BuildResult, IndexBuilder};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated vault in a temporary directory.
///
/// The directory is cleaned up on drop. Commands run with their config
/// lookup pointed at a separate empty directory so the user's own
/// `config.toml` never leaks into tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the vault directory
    vault_dir: PathBuf,
    /// Directory used as the config home
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty vault.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let vault_dir = temp_dir.path().join("vault");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&vault_dir).expect("Failed to create vault directory");
        std::fs::create_dir_all(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            vault_dir,
            config_home,
        }
    }

    /// Returns the path to the vault directory.
    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    /// Adds a test note to the vault and returns its path.
    pub fn add_note(&self, test_note: &TestNote) -> PathBuf {
        self.write_file(&test_note.file_path(), &test_note.content())
    }

    /// Adds several notes at once.
    pub fn add_notes(&self, notes: &[TestNote]) {
        for note in notes {
            self.add_note(note);
        }
    }

    /// Writes a file relative to the vault and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        self.write_bytes(name, content.as_bytes())
    }

    /// Writes raw bytes relative to the vault and returns its path.
    pub fn write_bytes(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.vault_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create note folder");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `crumbs/config.toml` into the isolated config home.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        let dir = self.config_home.join("crumbs");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, toml).expect("Failed to write config");
        path
    }

    /// Indexes the vault in-process.
    pub fn build_index(&self) -> BuildResult {
        IndexBuilder::new(&self.vault_dir)
            .build()
            .expect("Should index vault")
    }

    /// Creates a CrumbsCommand configured for this test environment.
    pub fn cmd(&self) -> CrumbsCommand {
        CrumbsCommand::new()
            .config_home(&self.config_home)
            .dir(&self.vault_dir)
    }

    /// Creates a CrumbsCommand without `--dir`, for config-driven tests.
    pub fn cmd_without_dir(&self) -> CrumbsCommand {
        CrumbsCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumbs::domain::{LinkGraph, NoteId};

    #[test]
    fn test_env_creates_vault_directory() {
        let env = TestEnv::new();
        assert!(env.vault_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.vault_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.vault_dir().to_string_lossy());
    }

    #[test]
    fn test_env_add_note_in_folder() {
        let env = TestEnv::new();
        let path = env.add_note(&TestNote::new("Areas/Leaf").parent("Mid"));

        assert!(path.is_file());
        assert!(path.ends_with("Areas/Leaf.md"));
    }

    #[test]
    fn test_env_build_index_includes_notes() {
        let env = TestEnv::new();
        env.add_notes(&[
            TestNote::new("Home").link("Leaf"),
            TestNote::new("Leaf"),
        ]);

        let result = env.build_index();
        let leaf = NoteId::new("Leaf.md").unwrap();

        assert_eq!(result.indexed, 2);
        assert_eq!(
            result.index.backlinks_of(&leaf),
            vec![NoteId::new("Home.md").unwrap()]
        );
    }
}
