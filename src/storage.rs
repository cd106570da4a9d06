//! Durable key-value slots for checklist state
//!
//! A slot holds one string value under a string key, the same contract a
//! browser's local storage offers. The checklist only ever uses a single
//! slot ([`STORAGE_KEY`]), but the file backend keeps every key it finds so
//! several tools can share one document.

use crate::error::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key of the slot holding the serialized completion state
pub const STORAGE_KEY: &str = "bcbid-checklist-state";

/// A durable key-value slot store
pub trait SlotStorage: Send {
    /// Read a slot; `Ok(None)` when nothing has been stored under `key`
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`
    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Slots kept in a single JSON document on disk
///
/// The document is an object of string values:
/// `{"bcbid-checklist-state": "{\"bceid\":true}"}`.
/// Writes go to a sibling temp file that is then renamed over the original.
pub struct FileSlotStorage {
    file_path: PathBuf,
}

impl FileSlotStorage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_document(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.file_path).map_err(|source| StorageError::Read {
            path: self.file_path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            StorageError::Malformed(format!("{}: {}", self.file_path.display(), e))
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.file_path.clone(),
            source,
        }
    }
}

impl SlotStorage for FileSlotStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut document = self.load_document()?;
        Ok(document.remove(key))
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut document = match self.load_document() {
            Ok(document) => document,
            Err(e) if e.is_read_error() => {
                tracing::warn!(error = %e, "Replacing unreadable storage document");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        document.insert(key.to_string(), value.to_string());

        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| StorageError::Malformed(e.to_string()))?;

        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, content).map_err(|e| self.write_error(e))?;
        if let Err(e) = fs::rename(&temp_path, &self.file_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.write_error(e));
        }

        tracing::debug!(key, path = %self.file_path.display(), "Slot written");
        Ok(())
    }
}

/// In-process slots, lost when the process exits
///
/// Clones share the same slots, so a new store built on a clone sees what
/// an earlier store wrote, like reloading a page.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. with a value written by an older version
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        storage
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.slots
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
