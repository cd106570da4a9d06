use super::definition::{ChecklistCategory, ChecklistDefinition};
use super::progress::Progress;
use super::state::CompletionState;
use crate::error::{ChecklistError, StorageError};
use crate::storage::{STORAGE_KEY, SlotStorage};
use std::collections::BTreeMap;

/// Completion and expansion state for one checklist
///
/// Completion is restored from the storage slot once, in [`initialize`],
/// and written back in full after every item toggle. Expansion lives only
/// as long as the store. Progress is always recomputed from the current
/// completion state.
///
/// [`initialize`]: ChecklistStore::initialize
pub struct ChecklistStore {
    definition: ChecklistDefinition,
    completion: CompletionState,
    expansion: BTreeMap<String, bool>,
    storage: Box<dyn SlotStorage>,
}

impl ChecklistStore {
    /// Build a store, restoring completion state from `storage`
    ///
    /// Never fails: an absent, unreadable, or malformed slot yields an
    /// empty completion state and a warning in the log.
    pub fn initialize(definition: ChecklistDefinition, storage: impl SlotStorage + 'static) -> Self {
        let completion = match Self::restore(&storage) {
            Ok(Some(state)) => {
                tracing::info!(entries = state.len(), "Restored checklist state");
                state
            }
            Ok(None) => CompletionState::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load checklist state, starting empty");
                CompletionState::new()
            }
        };

        let expansion = definition
            .categories
            .iter()
            .map(|c| (c.id.clone(), c.expanded_by_default))
            .collect();

        Self {
            definition,
            completion,
            expansion,
            storage: Box::new(storage),
        }
    }

    fn restore(storage: &dyn SlotStorage) -> Result<Option<CompletionState>, StorageError> {
        match storage.read_slot(STORAGE_KEY)? {
            Some(content) => CompletionState::from_json(&content).map(Some),
            None => Ok(None),
        }
    }

    pub fn definition(&self) -> &ChecklistDefinition {
        &self.definition
    }

    /// Flip an item's done flag and persist the whole completion state
    ///
    /// Returns the new flag. A failed write is logged and ignored; the
    /// in-memory state keeps the change either way.
    pub fn toggle_item(&mut self, id: &str) -> Result<bool, ChecklistError> {
        if !self.definition.contains_item(id) {
            return Err(ChecklistError::UnknownItem(id.to_string()));
        }

        let checked = self.completion.toggle(id);
        tracing::debug!(item = id, checked, "Toggled item");

        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, item = id, "Failed to save checklist state");
        }
        Ok(checked)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let content = self.completion.to_json()?;
        self.storage.write_slot(STORAGE_KEY, &content)
    }

    /// Flip a category between expanded and collapsed; not persisted
    pub fn toggle_category(&mut self, id: &str) -> Result<bool, ChecklistError> {
        let expanded = self
            .expansion
            .get_mut(id)
            .ok_or_else(|| ChecklistError::UnknownCategory(id.to_string()))?;
        *expanded = !*expanded;
        Ok(*expanded)
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.completion.is_checked(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.get(id).copied().unwrap_or(false)
    }

    /// Snapshot of the completion state, as persisted
    pub fn checked_items(&self) -> BTreeMap<String, bool> {
        self.completion.snapshot()
    }

    /// Snapshot of the expansion state
    pub fn expanded_categories(&self) -> BTreeMap<String, bool> {
        self.expansion.clone()
    }

    pub fn category_progress(&self, category: &ChecklistCategory) -> Progress {
        let completed = category
            .items
            .iter()
            .filter(|item| self.completion.is_checked(&item.id))
            .count();
        Progress::new(completed, category.items.len())
    }

    /// Progress over every item of every category, in definition order
    pub fn total_progress(&self) -> Progress {
        let (completed, total) = self
            .definition
            .all_items()
            .fold((0, 0), |(completed, total), item| {
                let done = usize::from(self.completion.is_checked(&item.id));
                (completed + done, total + 1)
            });
        Progress::new(completed, total)
    }

    pub fn progress_percent(&self) -> u32 {
        self.total_progress().percent()
    }

    /// All requirements met; never true for an empty checklist
    pub fn is_ready(&self) -> bool {
        self.progress_percent() == 100
    }
}
