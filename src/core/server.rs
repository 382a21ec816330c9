//! MCP Server implementation and lifecycle management.
//!
//! This module contains the protocol handler. It answers `tools/list` from
//! the static catalog and routes `tools/call` through the [`ToolRegistry`].
//! Every failure of a tool call reaches the client as a single
//! "Tool execution failed: ..." error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::guides::{GuideClient, GuideSource};
use crate::domains::tools::{ToolExecutionError, ToolRegistry};

/// The main MCP server handler.
///
/// Holds no mutable state; clones share the configuration and guide source.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool catalog and dispatch.
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a new MCP server talking to the configured guide API.
    pub fn new(config: Config) -> Result<Self> {
        info!(
            "Initializing AI Developer Guide MCP Server with baseUrl: {}",
            config.guide.base_url
        );
        let client = GuideClient::from_config(&config.guide)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create a server around any guide source.
    pub fn with_source(config: Config, source: Arc<dyn GuideSource>) -> Self {
        Self {
            config: Arc::new(config),
            registry: ToolRegistry::new(source),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        let tools = ToolRegistry::get_all_tools();
        info!("Returning {} available tools", tools.len());
        tools
    }

    /// Call a tool by name.
    ///
    /// Unknown tools, bad arguments and fetch failures all come back as a
    /// [`ToolExecutionError`].
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> std::result::Result<CallToolResult, ToolExecutionError> {
        info!(
            "Tool called: \"{}\" with args: {}",
            name,
            serde_json::Value::Object(arguments.clone())
        );

        self.registry
            .call_tool(name, arguments)
            .await
            .map_err(|e| {
                warn!("Tool execution failed for \"{}\": {}", name, e);
                ToolExecutionError::from(e)
            })
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(
                "Tools for reading the AI Developer Guide: fetch the main guide, fetch a \
                 guide by category and topic, or list the available guides."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        };
        info.server_info.name = self.name().to_string();
        info.server_info.version = self.version().to_string();
        info
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("ListTools request received");
        Ok(ListToolsResult {
            tools: McpServer::list_tools(self),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        McpServer::call_tool(self, &request.name, arguments)
            .await
            .map_err(McpError::from)
    }
}
