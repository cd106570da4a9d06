//! Error types for the checklist store
//!
//! Storage errors never escape the store: reads fall back to an empty
//! completion state and writes are logged and dropped. Only id lookups
//! and definition loading report errors to callers.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the durable storage slot
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed stored value: {0}")]
    Malformed(String),

    #[error("Storage is unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Returns true if this error happened while reading a slot
    pub fn is_read_error(&self) -> bool {
        matches!(self, StorageError::Read { .. } | StorageError::Malformed(_))
    }
}

/// Rejected checklist mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistError {
    #[error("Item '{0}' is not part of the checklist")]
    UnknownItem(String),

    #[error("Category '{0}' is not part of the checklist")]
    UnknownCategory(String),
}

/// Invalid checklist definition files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read checklist definition {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse checklist definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Checklist definition has an empty {0} id")]
    EmptyId(&'static str),

    #[error("Duplicate category id '{0}'")]
    DuplicateCategory(String),
}
