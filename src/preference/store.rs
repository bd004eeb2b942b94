//! Client-local key-value settings store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Store errors. Reads never fail; only writes report errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

/// Persisted key-value settings owned by the environment.
pub trait PreferenceStore {
    /// Look up a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a value, persisting it immediately.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store with no backing file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat TOML table on disk, written through on every `set`.
///
/// Entries this store did not write are kept as they are, whatever their type.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: toml::Table,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing, unreadable or malformed file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::read_values(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(path: &Path) -> toml::Table {
        if !path.exists() {
            tracing::debug!("No preference file at {}", path.display());
            return toml::Table::new();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return toml::Table::new();
            }
        };

        match content.parse::<toml::Table>() {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Ignoring malformed preference file {}: {}", path.display(), e);
                toml::Table::new()
            }
        }
    }

    fn write_values(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::IoError(e.to_string()))?;
        }

        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| StoreError::SerializeError(e.to_string()))?;

        std::fs::write(&self.path, content).map_err(|e| StoreError::IoError(e.to_string()))
    }
}

impl PreferenceStore for FileStore {
    /// Strings are returned as-is; other values in their TOML notation.
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|value| match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .insert(key.to_string(), toml::Value::String(value.to_string()));
        self.write_values()
    }
}

/// Store in the platform config directory, or an in-memory one when the
/// platform has none.
pub fn open_default_store() -> Box<dyn PreferenceStore> {
    match crate::storage::config::get_preferences_path() {
        Some(path) => Box::new(FileStore::open(path)),
        None => {
            tracing::warn!("No config directory; theme preference will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}
