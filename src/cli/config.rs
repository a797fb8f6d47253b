//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::infra::LogSettings;
use crate::render::DEFAULT_LINK_BASE;
use crate::sync::{DEFAULT_INTERVAL, SyncOptions};

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE: &str = "arcwiki.db";

/// Default site name shown in document titles.
pub const DEFAULT_SITE_TITLE: &str = "ArcWiki";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// SQLite database file
    pub database: Option<PathBuf>,

    /// Seconds between synchronizer passes
    pub sync_interval_secs: Option<u64>,

    /// Path prefix for internal links
    pub link_base: Option<String>,

    /// Site name for rendered documents
    pub site_title: Option<String>,

    /// Tracing filter, e.g. `arcwiki=debug`
    pub log: Option<String>,

    /// Clear edges of owners whose body has no category tags
    #[serde(default)]
    pub clear_untagged: bool,
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

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/arcwiki/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("arcwiki")
            .join("config.toml")
    }

    /// Resolve the database file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `database` setting
    /// 3. `arcwiki.db` in the current working directory
    pub fn database_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    /// Resolve the synchronizer interval, with CLI argument taking precedence.
    pub fn sync_interval(&self, cli_secs: Option<u64>) -> Duration {
        cli_secs
            .or(self.sync_interval_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_INTERVAL)
    }

    pub fn link_base(&self) -> &str {
        self.link_base.as_deref().unwrap_or(DEFAULT_LINK_BASE)
    }

    pub fn site_title(&self) -> &str {
        self.site_title.as_deref().unwrap_or(DEFAULT_SITE_TITLE)
    }

    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            clear_untagged: self.clear_untagged,
        }
    }

    pub fn log_settings(&self, verbosity: u8) -> LogSettings {
        LogSettings {
            config_filter: self.log.clone(),
            verbosity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_defaults() {
        let config = Config::default();
        assert_eq!(config.database_path(None), PathBuf::from("arcwiki.db"));
        assert_eq!(config.sync_interval(None), Duration::from_secs(20));
        assert_eq!(config.link_base(), "/title/");
        assert_eq!(config.site_title(), "ArcWiki");
        assert!(!config.sync_options().clear_untagged);
    }

    #[test]
    fn database_prefers_cli_arg() {
        let config = Config {
            database: Some(PathBuf::from("/config/wiki.db")),
            ..Config::default()
        };
        let cli_db = PathBuf::from("/cli/wiki.db");
        assert_eq!(config.database_path(Some(&cli_db)), cli_db);
        assert_eq!(config.database_path(None), PathBuf::from("/config/wiki.db"));
    }

    #[test]
    fn interval_prefers_cli_arg() {
        let config = Config {
            sync_interval_secs: Some(5),
            ..Config::default()
        };
        assert_eq!(config.sync_interval(Some(1)), Duration::from_secs(1));
        assert_eq!(config.sync_interval(None), Duration::from_secs(5));
    }

    #[test]
    fn parses_every_key() {
        let config = Config::parse(
            r#"
            database = "/srv/wiki.db"
            sync_interval_secs = 60
            link_base = "/wiki/"
            site_title = "Field Notes"
            log = "arcwiki=debug"
            clear_untagged = true
            "#,
        )
        .unwrap();

        assert_eq!(config.database, Some(PathBuf::from("/srv/wiki.db")));
        assert_eq!(config.sync_interval(None), Duration::from_secs(60));
        assert_eq!(config.link_base(), "/wiki/");
        assert_eq!(config.site_title(), "Field Notes");
        assert_eq!(config.log_settings(0).config_filter.as_deref(), Some("arcwiki=debug"));
        assert!(config.sync_options().clear_untagged);
    }

    #[test]
    fn rejects_bad_types() {
        assert!(Config::parse("sync_interval_secs = \"soon\"").is_err());
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("arcwiki/config.toml"));
    }
}
