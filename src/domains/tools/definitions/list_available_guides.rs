//! `list_available_guides` tool.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::time::Instant;
use tracing::info;

use super::parse_params;
use crate::domains::guides::GuideSource;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::render::render_guide_list;

// Doc comments here would leak into the input schema as a description.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[schemars(extend("properties" = {}))]
pub struct ListAvailableGuidesParams {}

/// Guide listing tool implementation.
#[derive(Debug, Clone, Default)]
pub struct ListAvailableGuidesTool;

impl ListAvailableGuidesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_available_guides";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all available guides with their categories and descriptions";

    /// Execute the tool logic.
    ///
    /// An unreachable index yields an empty listing, not an error.
    pub async fn execute(
        source: &dyn GuideSource,
        _params: ListAvailableGuidesParams,
    ) -> Result<CallToolResult, ToolError> {
        info!("Listing available guides...");
        let started = Instant::now();

        let guides = source.list_available_guides().await;

        info!(
            "Available guides listed successfully in {}ms ({} guides found)",
            started.elapsed().as_millis(),
            guides.len()
        );
        Ok(CallToolResult::success(vec![Content::text(
            render_guide_list(&guides),
        )]))
    }

    /// Parse raw arguments and execute.
    pub async fn handle(
        source: &dyn GuideSource,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let params = parse_params::<ListAvailableGuidesParams>(arguments)?;
        Self::execute(source, params).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListAvailableGuidesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
