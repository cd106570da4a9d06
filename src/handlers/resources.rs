//! Resources handler

use crate::ChecklistServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl ChecklistServerHandler {
    /// Quick links and help desk contacts from the checklist definition.
    pub async fn handle_resources(&self) -> McpResult<String> {
        let store = self.store();
        Ok(formatting::format_resources(store.definition()))
    }
}
