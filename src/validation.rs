//! Validation helper functions for the checklist MCP server
//!
//! This module contains id normalization and the messages returned for
//! ids that are not part of the checklist.

use crate::checklist::ChecklistDefinition;

/// Normalize an item or category id supplied by the MCP client
///
/// # Examples
/// ```
/// # use bcbid_checklist::validation::normalize_id;
/// assert_eq!(normalize_id("  bceid "), "bceid");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim().to_string()
}

/// List every item id of the checklist, in category order
pub fn format_available_items(definition: &ChecklistDefinition) -> String {
    let ids: Vec<&str> = definition.all_items().map(|i| i.id.as_str()).collect();
    if ids.is_empty() {
        "The checklist has no items.".to_string()
    } else {
        format!("Available items: {}", ids.join(", "))
    }
}

/// Format an error message for an unknown category id
pub fn format_unknown_category_error(category_id: &str, definition: &ChecklistDefinition) -> String {
    let ids = definition.category_ids();
    if ids.is_empty() {
        format!(
            "Category '{}' does not exist. The checklist has no categories.",
            category_id
        )
    } else {
        format!(
            "Category '{}' does not exist.\nAvailable categories: {}",
            category_id,
            ids.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_lists_ids() {
        let message = format_unknown_category_error("nope", &ChecklistDefinition::default());
        assert!(message.starts_with("Category 'nope' does not exist."));
        assert!(message.contains("registration, compliance, insurance, bonding, documents, optional"));
    }

    #[test]
    fn test_available_items_on_empty_checklist() {
        let definition = ChecklistDefinition {
            categories: Vec::new(),
            quick_links: Vec::new(),
            help_contacts: Vec::new(),
        };
        assert_eq!(
            format_available_items(&definition),
            "The checklist has no items."
        );
    }
}
