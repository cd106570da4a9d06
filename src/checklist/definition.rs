use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A single requirement that can be checked off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique identifier, also the key in the persisted completion state
    pub id: String,
    /// Short title shown in the checklist
    pub label: String,
    /// One-line explanation of the requirement
    pub description: String,
    /// Optional external URL with more information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Text for the link; renderers fall back to "Link"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_label: Option<String>,
    /// Free-form estimate such as "1-2 weeks"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Free-form cost such as "$40 (sole prop)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

impl ChecklistItem {
    /// Create an item with only the required fields
    pub fn new(id: &str, label: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            link: None,
            link_label: None,
            estimated_time: None,
            cost: None,
        }
    }

    pub fn with_link(mut self, url: &str, label: &str) -> Self {
        self.link = Some(url.to_string());
        self.link_label = Some(label.to_string());
        self
    }

    pub fn with_estimated_time(mut self, estimate: &str) -> Self {
        self.estimated_time = Some(estimate.to_string());
        self
    }

    pub fn with_cost(mut self, cost: &str) -> Self {
        self.cost = Some(cost.to_string());
        self
    }

    /// Label to display for the link, if there is a link at all
    pub fn link_text(&self) -> Option<&str> {
        self.link
            .as_ref()
            .map(|_| self.link_label.as_deref().unwrap_or("Link"))
    }
}

fn default_expanded() -> bool {
    true
}

/// An ordered group of items with its own expand/collapse state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Whether the category starts expanded in a new session
    #[serde(default = "default_expanded")]
    pub expanded_by_default: bool,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

/// A shortcut to an external portal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub label: String,
    pub url: String,
}

/// Who to call when stuck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpContact {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The static checklist: categories plus supporting resources
///
/// Definitions are fixed for the lifetime of a store. The built-in one is
/// returned by [`ChecklistDefinition::default`]; custom ones can be loaded
/// from TOML:
///
/// ```toml
/// [[categories]]
/// id = "registration"
/// title = "1. Registration"
/// description = "Essential registrations"
///
/// [[categories.items]]
/// id = "bceid"
/// label = "Obtain Business BCeID"
/// description = "Required for BC Bid login."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistDefinition {
    #[serde(default)]
    pub categories: Vec<ChecklistCategory>,
    #[serde(default)]
    pub quick_links: Vec<QuickLink>,
    #[serde(default)]
    pub help_contacts: Vec<HelpContact>,
}

impl Default for ChecklistDefinition {
    fn default() -> Self {
        super::defaults::bc_bid_checklist()
    }
}

impl ChecklistDefinition {
    /// Parse and validate a definition from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let definition: ChecklistDefinition = toml::from_str(content)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Load and validate a definition from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject empty ids and duplicate category ids
    ///
    /// Duplicate item ids across categories are accepted; progress counts
    /// such an item once per appearance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(ConfigError::EmptyId("category"));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(ConfigError::DuplicateCategory(category.id.clone()));
            }
            if category.items.iter().any(|item| item.id.trim().is_empty()) {
                return Err(ConfigError::EmptyId("item"));
            }
        }
        Ok(())
    }

    /// Find a category by id
    pub fn category(&self, id: &str) -> Option<&ChecklistCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All items in category order, duplicates included
    pub fn all_items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Whether any category contains an item with this id
    pub fn contains_item(&self, id: &str) -> bool {
        self.all_items().any(|item| item.id == id)
    }

    /// Find the first item with this id
    pub fn item(&self, id: &str) -> Option<&ChecklistItem> {
        self.all_items().find(|item| item.id == id)
    }

    pub fn category_ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }
}
