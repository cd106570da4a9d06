//! BC Bid Checklist MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for tracking
//! readiness to bid on BC government contracts. A fixed checklist of
//! requirement items is grouped into categories; items are checked off one
//! at a time and the completion state survives restarts.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `ChecklistServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `checklist` module - Checklist definition, state and progress
//! - **Persistence Layer**: `storage` module - Durable key-value slots
//!
//! # Example
//!
//! ```no_run
//! use bcbid_checklist::{ChecklistDefinition, ChecklistServerHandler};
//!
//! let handler = ChecklistServerHandler::new("checklist-state.json", ChecklistDefinition::default());
//! // Use handler with MCP server...
//! ```

pub mod checklist;
pub mod error;
pub mod formatting;
mod handlers;
pub mod storage;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use checklist::{
    ChecklistCategory, ChecklistDefinition, ChecklistItem, ChecklistStore, CompletionState,
    Progress,
};
pub use error::{ChecklistError, ConfigError, StorageError};
pub use storage::{FileSlotStorage, MemorySlotStorage, STORAGE_KEY, SlotStorage};

/// MCP Server handler for the BC Bid readiness checklist
///
/// Tool calls are serialized through the store mutex, so every toggle and
/// its save complete before the next tool call touches the state.
pub struct ChecklistServerHandler {
    pub(crate) store: Mutex<ChecklistStore>,
}

impl ChecklistServerHandler {
    /// Create a handler whose completion state is kept in a JSON file
    ///
    /// # Arguments
    /// * `storage_path` - Path to the slot document; created on first toggle
    /// * `definition` - Checklist to track
    ///
    /// # Example
    /// ```no_run
    /// # use bcbid_checklist::{ChecklistDefinition, ChecklistServerHandler};
    /// let handler = ChecklistServerHandler::new("state.json", ChecklistDefinition::default());
    /// ```
    pub fn new(storage_path: impl AsRef<Path>, definition: ChecklistDefinition) -> Self {
        let storage = FileSlotStorage::new(storage_path);
        Self::with_store(ChecklistStore::initialize(definition, storage))
    }

    /// Create a handler that forgets its state when the process exits
    pub fn in_memory(definition: ChecklistDefinition) -> Self {
        Self::with_store(ChecklistStore::initialize(definition, MemorySlotStorage::new()))
    }

    pub fn with_store(store: ChecklistStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Lock the store, recovering from a poisoned lock
    ///
    /// Every mutation is a single map write, so the state is consistent
    /// even if a previous holder panicked.
    pub fn store(&self) -> MutexGuard<'_, ChecklistStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// BC Bid readiness checklist server.
///
/// Tracks the registrations, compliance letters, insurance, bonding and bid
/// documents a supplier needs before bidding on BC government contracts.
///
/// Key concepts:
/// - **item**: a single requirement, checked off when done (e.g. "bceid", "cgl")
/// - **category**: an ordered group of items (e.g. "registration", "insurance")
/// - **progress**: completed/total per category and overall, with a percentage
///
/// Item completion is saved after every toggle. Category expansion only
/// affects the `checklist` view and resets when the server restarts.
#[mcp_server]
impl McpServer for ChecklistServerHandler {
    /// **Review**: Show the checklist with progress. Collapsed categories show only their header.
    /// **Tip**: Pass a category id to see all of its items regardless of expansion.
    #[tool]
    async fn checklist(
        &self,
        /// Category id (e.g., "registration"); omit for the whole checklist
        category: Option<String>,
    ) -> McpResult<String> {
        self.handle_checklist(category).await
    }

    /// **Check off**: Toggle items between done and not done. Changes are saved immediately.
    /// **Batch**: Supports multiple IDs (e.g., ["bceid", "bcbid-account"]).
    #[tool]
    async fn toggle_item(
        &self,
        /// Item IDs to toggle
        ids: Vec<String>,
    ) -> McpResult<String> {
        self.handle_toggle_item(ids).await
    }

    /// **Organize view**: Expand or collapse a category in the checklist view. Not saved.
    #[tool]
    async fn toggle_category(
        &self,
        /// Category id (e.g., "optional")
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_category(id).await
    }

    /// **Status**: Overall readiness percentage and per-category completed/total counts.
    #[tool]
    async fn progress(&self) -> McpResult<String> {
        self.handle_progress().await
    }

    /// **Help**: Portal quick links and help desk contacts.
    #[tool]
    async fn resources(&self) -> McpResult<String> {
        self.handle_resources().await
    }
}
