// SPDX-License-Identifier: MPL-2.0
//! This module handles the shell's persisted preferences: a flat map of named
//! string values stored in a `preferences.toml` file.
//!
//! The store behaves like browser local storage: values are plain strings,
//! writes go straight to disk, and readers supply their own defaults. Typed
//! access with per-key fallback lives in [`preferences`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Use `load_with_override()` with a directory (tests, portable installs)
//! 3. `--config-dir` CLI flag or `ONEUI_SHELL_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use oneui_shell::config::{PreferenceStore, KEY_THEME};
//!
//! let (mut store, _warning) = PreferenceStore::load();
//! store.set(KEY_THEME, "dark").expect("failed to save preferences");
//! assert_eq!(store.get(KEY_THEME), Some("dark"));
//! ```

pub mod defaults;
pub mod paths;
pub mod preferences;

pub use defaults::*;
pub use preferences::{Preferences, ThemeChoice, Wallpaper};

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const PREFERENCES_FILE: &str = "preferences.toml";

/// Named string preferences, optionally backed by a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceStore {
    values: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl PreferenceStore {
    /// Creates a store that never touches the filesystem.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the store from the default config directory.
    ///
    /// Returns a tuple of (store, optional_warning). A missing file yields an
    /// empty store; an unreadable one yields an empty store and a warning.
    pub fn load() -> (Self, Option<String>) {
        Self::load_with_override(None)
    }

    /// Loads the store from a custom directory.
    pub fn load_with_override(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = get_preferences_path_with_override(base_dir) else {
            return (Self::in_memory(), None);
        };

        if !path.exists() {
            return (Self::empty_at(path), None);
        }

        match Self::load_from_path(&path) {
            Ok(store) => (store, None),
            Err(err) => {
                let warning = format!("ignoring unreadable {}: {}", path.display(), err);
                log::warn!("{warning}");
                (Self::empty_at(path), Some(warning))
            }
        }
    }

    /// Loads preferences from a specific file.
    ///
    /// Non-string scalars (`anim-speed = 1.5`, `oneui8-mode = false`) are kept
    /// in their textual form so hand-edited files still resolve.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let table: toml::Table = toml::from_str(&content)?;

        let mut values = BTreeMap::new();
        for (key, value) in table {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    return Err(Error::Config(format!(
                        "preference `{key}` must be a scalar, found {}",
                        other.type_str()
                    )))
                }
            };
            values.insert(key, text);
        }

        Ok(Self {
            values,
            path: Some(path.to_path_buf()),
        })
    }

    fn empty_at(path: PathBuf) -> Self {
        Self {
            values: BTreeMap::new(),
            path: Some(path),
        }
    }

    /// Returns the file this store writes to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the stored value or `default` when the key is absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Stores a value and writes the store through to disk.
    ///
    /// The in-memory value is updated even if the write fails.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.values.insert(key.to_string(), value.into());
        self.save()
    }

    /// Removes a value and writes the store through to disk.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }

    /// Writes the store to its backing file. In-memory stores do nothing.
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => self.save_to_path(path),
            None => Ok(()),
        }
    }

    /// Writes the store to a specific file, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.values).map_err(Error::from)?;
        fs::write(path, content)?;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over stored `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn get_preferences_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(PREFERENCES_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn in_memory_store_starts_empty() {
        let store = PreferenceStore::in_memory();
        assert!(store.is_empty());
        assert!(store.path().is_none());
        assert_eq!(store.get(KEY_THEME), None);
    }

    #[test]
    fn get_or_falls_back_to_default() {
        let mut store = PreferenceStore::in_memory();
        assert_eq!(store.get_or(KEY_ANIM_EASING, DEFAULT_ANIM_EASING_PREF), "elastic");

        store.set(KEY_ANIM_EASING, "custom").expect("in-memory set");
        assert_eq!(store.get_or(KEY_ANIM_EASING, DEFAULT_ANIM_EASING_PREF), "custom");
    }

    #[test]
    fn set_writes_through_to_disk() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (mut store, warning) = PreferenceStore::load_with_override(Some(base_dir.clone()));
        assert!(warning.is_none());
        store.set(KEY_ANIM_SPEED, "1.5").expect("set should persist");
        store.set(KEY_WALLPAPER, "ocean").expect("set should persist");

        let (reloaded, warning) = PreferenceStore::load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(reloaded.get(KEY_ANIM_SPEED), Some("1.5"));
        assert_eq!(reloaded.get(KEY_WALLPAPER), Some("ocean"));
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("path");

        let (mut store, _) = PreferenceStore::load_with_override(Some(nested.clone()));
        store.set(KEY_THEME, "dark").expect("set should create directories");

        assert!(nested.join(PREFERENCES_FILE).exists());
    }

    #[test]
    fn remove_deletes_key() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (mut store, _) = PreferenceStore::load_with_override(Some(base_dir.clone()));
        store.set(KEY_THEME, "dark").expect("set");
        store.remove(KEY_THEME).expect("remove");

        let (reloaded, _) = PreferenceStore::load_with_override(Some(base_dir));
        assert_eq!(reloaded.get(KEY_THEME), None);
    }

    #[test]
    fn missing_file_yields_empty_store_bound_to_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (store, warning) =
            PreferenceStore::load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none(), "should not warn for missing file");
        assert!(store.is_empty());
        assert_eq!(
            store.path(),
            Some(temp_dir.path().join(PREFERENCES_FILE).as_path())
        );
    }

    #[test]
    fn corrupted_file_yields_empty_store_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "not = valid = toml").expect("write file");

        let (store, warning) =
            PreferenceStore::load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_some(), "should warn about parse error");
        assert!(store.is_empty());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "not = valid = toml").expect("write file");

        match PreferenceStore::load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn hand_edited_scalars_are_read_as_text() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "anim-speed = 2\noneui8-mode = false\ntheme = \"dark\"\n")
            .expect("write file");

        let store = PreferenceStore::load_from_path(&path).expect("scalars should load");
        assert_eq!(store.get(KEY_ANIM_SPEED), Some("2"));
        assert_eq!(store.get(KEY_ONEUI8_MODE), Some("false"));
        assert_eq!(store.get(KEY_THEME), Some("dark"));
    }

    #[test]
    fn nested_tables_are_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "[theme]\nname = \"dark\"\n").expect("write file");

        assert!(matches!(
            PreferenceStore::load_from_path(&path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn iter_is_key_ordered() {
        let mut store = PreferenceStore::in_memory();
        store.set(KEY_WALLPAPER, "night").expect("set");
        store.set(KEY_ANIM_SPEED, "1").expect("set");

        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![KEY_ANIM_SPEED, KEY_WALLPAPER]);
    }
}
