//! Common test utilities for integration tests
#![allow(dead_code)]

use bcbid_checklist::{
    ChecklistDefinition, ChecklistServerHandler, ChecklistStore, MemorySlotStorage, STORAGE_KEY,
    SlotStorage, StorageError,
};
use tempfile::NamedTempFile;

/// Create a test handler with temporary file storage
pub fn get_test_handler() -> (ChecklistServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = ChecklistServerHandler::new(temp_file.path(), ChecklistDefinition::default());
    (handler, temp_file)
}

/// Default checklist on shared in-memory storage
pub fn memory_store() -> (ChecklistStore, MemorySlotStorage) {
    let storage = MemorySlotStorage::new();
    let store = ChecklistStore::initialize(ChecklistDefinition::default(), storage.clone());
    (store, storage)
}

/// Default checklist restored from a raw slot value
pub fn store_with_slot(value: &str) -> ChecklistStore {
    let storage = MemorySlotStorage::with_slot(STORAGE_KEY, value);
    ChecklistStore::initialize(ChecklistDefinition::default(), storage)
}

/// Storage whose reads and writes always fail, like a disabled browser store
pub struct BrokenStorage;

impl SlotStorage for BrokenStorage {
    fn read_slot(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn write_slot(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

/// Every item id of the default checklist, in category order
pub fn all_item_ids() -> Vec<String> {
    ChecklistDefinition::default()
        .all_items()
        .map(|item| item.id.clone())
        .collect()
}
