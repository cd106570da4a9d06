//! Toggle category handler

use crate::ChecklistServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Expands or collapses a category for the rest of the session.
    pub async fn handle_toggle_category(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_id(&id);
        let mut store = self.store();

        let expanded = match store.toggle_category(&id) {
            Ok(expanded) => expanded,
            Err(_) => {
                let message = validation::format_unknown_category_error(&id, store.definition());
                bail_public!(_, "{}", message);
            }
        };

        let mut response = format!(
            "Category {} {}",
            id,
            if expanded { "expanded" } else { "collapsed" }
        );
        if let Some(category) = store.definition().category(&id) {
            response.push_str("\n\n");
            response.push_str(formatting::format_category(&store, category, expanded).trim_end());
        }
        Ok(response)
    }
}
