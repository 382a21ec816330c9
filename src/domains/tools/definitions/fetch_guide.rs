//! `fetch_guide` tool.
//!
//! Fetches one guide by category and topic (e.g. `languages` / `python`).

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::time::Instant;
use tracing::info;

use super::parse_params;
use crate::domains::guides::{GuideCategory, GuideSource};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::render::render_guide;

// Parameters for fetching a single guide.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FetchGuideParams {
    /// Category of the guide.
    #[schemars(description = "Category of the guide (languages, patterns, platforms, others)")]
    pub category: GuideCategory,

    /// Topic within the category.
    #[schemars(
        description = "Specific topic (e.g., python, shell-scripts, make, postgresql, cicd)"
    )]
    pub topic: String,
}

/// Guide tool implementation.
#[derive(Debug, Clone, Default)]
pub struct FetchGuideTool;

impl FetchGuideTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fetch_guide";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetch a specific guide (e.g., Python, Shell Scripts, Make, PostgreSQL)";

    /// Execute the tool logic.
    pub async fn execute(
        source: &dyn GuideSource,
        params: FetchGuideParams,
    ) -> Result<CallToolResult, ToolError> {
        info!(
            "Fetching guide: category=\"{}\", topic=\"{}\"",
            params.category, params.topic
        );
        let started = Instant::now();

        let guide = source.fetch_guide(params.category, &params.topic).await?;

        info!(
            "Guide fetched successfully in {}ms ({} chars)",
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
        let params = parse_params::<FetchGuideParams>(arguments)?;
        Self::execute(source, params).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FetchGuideParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
