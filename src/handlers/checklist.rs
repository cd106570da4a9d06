//! Checklist view handler

use crate::ChecklistServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Renders the whole checklist, or a single category with all its items.
    pub async fn handle_checklist(&self, category: Option<String>) -> McpResult<String> {
        let store = self.store();

        let Some(category_id) = category else {
            return Ok(formatting::format_checklist(&store));
        };

        let category_id = validation::normalize_id(&category_id);
        match store.definition().category(&category_id) {
            Some(category) => Ok(formatting::format_category(&store, category, true)
                .trim_end()
                .to_string()),
            None => {
                let message =
                    validation::format_unknown_category_error(&category_id, store.definition());
                bail_public!(_, "{}", message);
            }
        }
    }
}
