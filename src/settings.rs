//! Persistent launcher settings
//!
//! This module provides the settings document behind all launcher
//! commands: the scripts directory, the shell init file, the show-output
//! toggle, and the command-line history. The document lives in a single
//! JSON file; commands load it at the start of an invocation and save it
//! back only after a state-changing step succeeded.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File name of the settings document
const SETTINGS_FILE: &str = "LaunchScript.json";

/// Directory holding the settings document (and the log files)
const DATA_DIR: &str = "~/.launchscripts";

fn default_show_output() -> bool {
    true
}

fn default_directory() -> String {
    shellexpand::tilde("~/bin").into_owned()
}

fn default_local_shell() -> String {
    shellexpand::tilde("~/.bashrc").into_owned()
}

fn default_history() -> Vec<String> {
    vec!["ls -la".to_string()]
}

/// The flat settings document persisted as `LaunchScript.json`
///
/// Unknown fields in the file are ignored and missing fields fall back to
/// their defaults, so hand-edited or older documents still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Show captured stdout in an alert after a successful run
    #[serde(default = "default_show_output")]
    pub show_output: bool,
    /// Scripts directory scanned by the launch/edit/create commands
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Shell init file sourced before every launched command
    #[serde(default = "default_local_shell")]
    pub local_shell: String,
    /// Previously run command lines, kept sorted and deduplicated
    #[serde(default = "default_history")]
    pub command_line_history: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            show_output: default_show_output(),
            directory: default_directory(),
            local_shell: default_local_shell(),
            command_line_history: default_history(),
        }
    }
}

/// Store for the settings document with persistence
#[derive(Debug, Clone)]
pub struct SettingsStore {
    /// Path to the settings file
    file_path: PathBuf,
}

impl SettingsStore {
    /// Create a store with the default path (~/.launchscripts/LaunchScript.json)
    pub fn new() -> Self {
        SettingsStore {
            file_path: Self::default_path(),
        }
    }

    /// Create a store with a custom path (for embedding hosts and tests)
    pub fn with_path(path: PathBuf) -> Self {
        SettingsStore { file_path: path }
    }

    /// Get the default settings file path
    fn default_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(DATA_DIR).as_ref()).join(SETTINGS_FILE)
    }

    /// Path of the settings document
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Load the settings document from disk
    ///
    /// When the file does not exist yet, the defaults are written to disk
    /// and returned, so a fresh install is observable on the filesystem.
    #[instrument(name = "settings_load", skip(self))]
    pub fn load(&self) -> Result<Settings> {
        if !self.file_path.exists() {
            info!(path = %self.file_path.display(), "Settings file not found, writing defaults");
            let settings = Settings::default();
            self.save(&settings)?;
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&self.file_path).with_context(|| {
            format!("Failed to read settings file: {}", self.file_path.display())
        })?;

        let settings: Settings = serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse settings file: {}", self.file_path.display())
        })?;

        debug!(
            path = %self.file_path.display(),
            history_entries = settings.command_line_history.len(),
            "Loaded settings"
        );

        Ok(settings)
    }

    /// Save the settings document using atomic write (write temp + rename)
    #[instrument(name = "settings_save", skip_all)]
    pub fn save(&self, settings: &Settings) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string(settings).context("Failed to serialize settings")?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.file_path.with_extension("json.tmp");

        std::fs::write(&temp_path, &json).with_context(|| {
            format!(
                "Failed to write temp settings file: {}",
                temp_path.display()
            )
        })?;

        std::fs::rename(&temp_path, &self.file_path).with_context(|| {
            format!("Failed to rename temp file to {}", self.file_path.display())
        })?;

        info!(
            path = %self.file_path.display(),
            bytes = json.len(),
            "Saved settings"
        );

        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::with_path(dir.path().join(SETTINGS_FILE))
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let settings = store.load().unwrap();

        assert!(settings.show_output);
        assert_eq!(settings.command_line_history, vec!["ls -la".to_string()]);
        assert!(settings.directory.ends_with("bin"));
        assert!(store.path().exists());

        // The written file parses back to the same document
        let reread = store.load().unwrap();
        assert_eq!(reread, settings);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut settings = Settings::default();
        settings.show_output = false;
        settings.directory = "/opt/scripts".to_string();
        settings.command_line_history = vec!["cd ..".to_string(), "ls -la".to_string()];
        store.save(&settings).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), r#"{"show_output": false}"#).unwrap();

        let settings = store.load().unwrap();
        assert!(!settings.show_output);
        assert_eq!(settings.command_line_history, vec!["ls -la".to_string()]);
        assert!(settings.local_shell.ends_with(".bashrc"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        std::fs::write(
            store.path(),
            r#"{"show_output": true, "someFutureField": 42}"#,
        )
        .unwrap();

        assert!(store.load().is_ok());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "not json at all").unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&Settings::default()).unwrap();

        let temp_path = store.path().with_extension("json.tmp");
        assert!(!temp_path.exists());
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::with_path(dir.path().join("nested").join(SETTINGS_FILE));

        store.save(&Settings::default()).unwrap();
        assert!(store.path().exists());
    }
}
