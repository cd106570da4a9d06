//! Progress handler

use crate::ChecklistServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl ChecklistServerHandler {
    /// Overall and per-category completion counts.
    pub async fn handle_progress(&self) -> McpResult<String> {
        let store = self.store();
        Ok(formatting::format_progress(&store))
    }
}
