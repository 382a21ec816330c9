//! `fetch_main_guide` tool.
//!
//! Fetches the main AI Developer Guide and renders it as markdown text.

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
use crate::domains::tools::render::render_guide;

// Doc comments here would leak into the input schema as a description.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[schemars(extend("properties" = {}))]
pub struct FetchMainGuideParams {}

/// Main guide tool implementation.
#[derive(Debug, Clone, Default)]
pub struct FetchMainGuideTool;

impl FetchMainGuideTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fetch_main_guide";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch the main AI Developer Guide content with core development principles and practices";

    /// Execute the tool logic.
    pub async fn execute(
        source: &dyn GuideSource,
        _params: FetchMainGuideParams,
    ) -> Result<CallToolResult, ToolError> {
        info!("Fetching main guide...");
        let started = Instant::now();

        let guide = source.fetch_main_guide().await?;

        info!(
            "Main guide fetched successfully in {}ms ({} chars)",
            started.elapsed().as_millis(),
            guide.content.len()
        );
        Ok(CallToolResult::success(vec![Content::text(render_guide(
            &guide,
        ))]))
    }

    /// Parse raw arguments and execute.
    pub async fn handle(
        source: &dyn GuideSource,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let params = parse_params::<FetchMainGuideParams>(arguments)?;
        Self::execute(source, params).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FetchMainGuideParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
