use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Default)]
struct SlotData {
    #[serde(flatten)]
    data: BTreeMap<String, String>,
}

/// Small durable string-to-string store backed by a TOML file
///
/// Every mutation is written through to disk, so a crash after `set` or
/// `remove` returns leaves the file in the new state.
pub struct KeyValueStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl KeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            values: BTreeMap::new(),
        }
    }

    /// Open the store at `path`, reading existing values if the file exists
    pub fn open(path: PathBuf) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read {}", self.path.display()))?;
            let slot_data: SlotData = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", self.path.display()))?;
            self.values = slot_data.data;
            debug!(path = %self.path.display(), keys = self.values.len(), "Loaded key-value store");
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let slot_data = SlotData {
            data: self.values.clone(),
        };
        let content = toml::to_string_pretty(&slot_data)?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: String, value: String) -> Result<()> {
        self.values.insert(key, value);
        self.save()
    }

    /// Remove `key`; removing an absent key does not touch the file
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }

    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("session.toml");

        let mut store = KeyValueStore::open(path.clone()).unwrap();
        store.set("anime-tracker-user".to_string(), "{\"id\":\"1\"}".to_string()).unwrap();

        let reopened = KeyValueStore::open(path).unwrap();
        assert_eq!(reopened.get("anime-tracker-user"), Some(&"{\"id\":\"1\"}".to_string()));
    }

    #[test]
    fn test_remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.toml");

        let mut store = KeyValueStore::open(path.clone()).unwrap();
        store.set("key1".to_string(), "value1".to_string()).unwrap();
        store.set("key2".to_string(), "value2".to_string()).unwrap();
        store.remove("key1").unwrap();

        let reopened = KeyValueStore::open(path).unwrap();
        assert_eq!(reopened.get("key1"), None);
        assert_eq!(reopened.get("key2"), Some(&"value2".to_string()));
        assert_eq!(reopened.keys(), vec!["key2".to_string()]);
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = KeyValueStore::open(dir.path().join("absent.toml")).unwrap();
        assert!(store.keys().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_open_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(KeyValueStore::open(path).is_err());
    }
}
