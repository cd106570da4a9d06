//! Checklist domain models and state
//!
//! - `definition`: static categories, items and supporting resources
//! - `defaults`: the built-in BC Bid readiness checklist
//! - `state`: completion flags and their stored JSON form
//! - `progress`: completed/total counts and percentages
//! - `store`: the owned state object the server mutates

mod defaults;
mod definition;
mod progress;
mod state;
mod store;

pub use definition::{ChecklistCategory, ChecklistDefinition, ChecklistItem, HelpContact, QuickLink};
pub use progress::Progress;
pub use state::CompletionState;
pub use store::ChecklistStore;
