//! MCP tool handlers for the checklist server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod checklist;
pub mod progress;
pub mod resources;
pub mod toggle_category;
pub mod toggle_item;
