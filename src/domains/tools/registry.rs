//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The fixed catalog of tools, in listing order
//! - Dispatch of a tool call to the matching definition

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::definitions::{FetchGuideTool, FetchMainGuideTool, ListAvailableGuidesTool};
use super::error::ToolError;
use crate::domains::guides::GuideSource;

/// Tool registry - manages all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    source: Arc<dyn GuideSource>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the given guide source.
    pub fn new(source: Arc<dyn GuideSource>) -> Self {
        Self { source }
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// The catalog is static; the order is part of the protocol surface.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            FetchMainGuideTool::to_tool(),
            FetchGuideTool::to_tool(),
            ListAvailableGuidesTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let source = self.source.as_ref();
        match name {
            FetchMainGuideTool::NAME => FetchMainGuideTool::handle(source, arguments).await,
            FetchGuideTool::NAME => FetchGuideTool::handle(source, arguments).await,
            ListAvailableGuidesTool::NAME => {
                ListAvailableGuidesTool::handle(source, arguments).await
            }
            _ => {
                warn!("Unknown tool requested: \"{}\"", name);
                Err(ToolError::unknown_tool(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{StubGuides, text_of};

    #[test]
    fn test_tools_in_catalog_order() {
        let names: Vec<_> = ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                FetchMainGuideTool::NAME,
                FetchGuideTool::NAME,
                ListAvailableGuidesTool::NAME
            ]
        );
        assert_eq!(
            names,
            vec!["fetch_main_guide", "fetch_guide", "list_available_guides"]
        );
    }

    #[test]
    fn test_catalog_is_stable() {
        let first = serde_json::to_string(&ToolRegistry::get_all_tools()).unwrap();
        let second = serde_json::to_string(&ToolRegistry::get_all_tools()).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_registry_call_main_guide() {
        let registry = ToolRegistry::new(Arc::new(StubGuides::with_main_guide("T", "C", vec![])));
        let result = registry
            .call_tool("fetch_main_guide", JsonObject::new())
            .await
            .unwrap();
        assert_eq!(text_of(&result), "# T\n\nC");
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(Arc::new(StubGuides::default()));
        let err = registry
            .call_tool("unknown", JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: unknown");
    }
}
