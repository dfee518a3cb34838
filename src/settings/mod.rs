//! Persisted user preferences
//!
//! Preferences are plain values passed to the player and UI; nothing in the trace
//! core reads them. Storage sits behind [`SettingsStore`]:
//! - [`JsonFileStore`]: one JSON object on disk, written on every change
//! - [`MemoryStore`]: in-process map, used by tests and `--dump` runs
//!
//! Typed accessors live in [`speed`], [`language`] and [`stars`]. Reads never
//! fail: a missing or invalid value falls back to its default.

pub mod language;
pub mod speed;
pub mod stars;

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub use language::{load_language, save_language};
pub use speed::{load_speed, save_speed, SPEED_OPTIONS};
pub use stars::{cached_stars, resolve_stars, StarCache};

/// Key/value persistence for preferences
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// Settings held in memory only
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Settings kept in a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or malformed file is logged
    /// and treated as empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        JsonFileStore { path, values }
    }

    /// `<config_dir>/anagram-trace/settings.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("anagram-trace")
            .join("settings.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        debug!("Saved settings to {:?}", self.path);
        Ok(())
    }
}

fn load_values(path: &Path) -> Map<String, Value> {
    if !path.exists() {
        debug!("No settings file at {:?}, using defaults", path);
        return Map::new();
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(values)) => {
                debug!("Loaded settings from {:?}", path);
                values
            }
            Ok(_) => {
                warn!("Settings file {:?} is not a JSON object, ignoring it", path);
                Map::new()
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Map::new()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Map::new()
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
            .map_err(|e| Error::settings(format!("could not save '{}': {}", key, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").is_none());
        store.set("k", json!(1.5)).expect("set");
        assert_eq!(store.get("k"), Some(json!(1.5)));
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.json");

        let mut store = JsonFileStore::open(&path);
        assert!(store.get("playback_speed").is_none());
        store.set("playback_speed", json!(2.0)).expect("set");

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("playback_speed"), Some(json!(2.0)));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_file_store_ignores_garbage() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").expect("write");

        let mut store = JsonFileStore::open(&path);
        assert!(store.get("anything").is_none());

        // the next write replaces the broken file
        store.set("selected_language", json!("python")).expect("set");
        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("selected_language"), Some(json!("python")));
    }

    #[test]
    fn test_file_store_ignores_non_object() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2]").expect("write");

        assert!(JsonFileStore::open(&path).get("0").is_none());
    }
}
