//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{TestPage, WikiCommand};
use arcwiki::domain::CanonicalTitle;
use arcwiki::store::{SqliteStore, WikiRepository};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with its own database and config directory.
///
/// Everything lives in a temp directory removed on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the SQLite database used by [`TestEnv::cmd`].
    pub fn db_path(&self) -> PathBuf {
        self.root.join("arcwiki.db")
    }

    /// Directory standing in for `$XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> PathBuf {
        self.root.join("config")
    }

    /// Opens the environment's database directly.
    pub fn store(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path()).expect("Failed to open test database")
    }

    /// Saves a page straight into the database.
    pub fn add_page(&self, page: &TestPage) {
        let title = CanonicalTitle::new(page.title()).expect("Invalid page title");
        self.store()
            .save_page(&title, &page.markup())
            .expect("Failed to save test page");
    }

    /// Creates empty categories straight in the database.
    pub fn add_categories(&self, names: &[&str]) {
        let mut store = self.store();
        for name in names {
            let title = CanonicalTitle::new(name).expect("Invalid category title");
            store.add_category(&title).expect("Failed to add category");
        }
    }

    /// Writes `config.toml` where the binary will look for it.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config_home().join("arcwiki");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Writes a file in the environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// A command bound to this environment's database and config.
    pub fn cmd(&self) -> WikiCommand {
        WikiCommand::new()
            .config_home(&self.config_home())
            .db(&self.db_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
