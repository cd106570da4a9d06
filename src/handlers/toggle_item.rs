//! Toggle item handler

use crate::ChecklistServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Flips the done flag of each item; every successful toggle is saved.
    /// **Batch**: accepts several ids, reporting successes and failures separately.
    pub async fn handle_toggle_item(&self, ids: Vec<String>) -> McpResult<String> {
        if ids.is_empty() {
            bail_public!(_, "No IDs provided. Please specify at least one item ID.");
        }

        let mut store = self.store();

        let mut successes = Vec::new();
        let mut failures = Vec::new();

        for id in ids.iter().map(|id| validation::normalize_id(id)) {
            match store.toggle_item(&id) {
                Ok(checked) => successes.push((id, checked)),
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected toggle");
                    failures.push(format!("{}: not found", id));
                }
            }
        }

        let mut response = String::new();

        if !successes.is_empty() {
            response.push_str(&format!(
                "Toggled {} item{}:\n",
                successes.len(),
                if successes.len() == 1 { "" } else { "s" }
            ));
            for (id, checked) in &successes {
                let label = store
                    .definition()
                    .item(id)
                    .map(|item| item.label.as_str())
                    .unwrap_or(id.as_str());
                response.push_str(&format!(
                    "- {} ({}): {}\n",
                    label,
                    id,
                    if *checked { "done" } else { "not done" }
                ));
            }
            response.push('\n');
            response.push_str(&formatting::format_overall(&store));
            response.push('\n');
        }

        if !failures.is_empty() {
            if !response.is_empty() {
                response.push('\n');
            }
            response.push_str(&format!(
                "Failed to toggle {} item{}:\n",
                failures.len(),
                if failures.len() == 1 { "" } else { "s" }
            ));
            for failure in &failures {
                response.push_str(&format!("- {}\n", failure));
            }
        }

        if successes.is_empty() {
            let available = validation::format_available_items(store.definition());
            drop(store);
            bail_public!(_, "{}\n{}", response.trim(), available);
        }

        Ok(response.trim().to_string())
    }
}
