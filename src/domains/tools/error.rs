//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::guides::GuideError;

/// Errors that can occur while dispatching or executing a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The guide API call behind the tool failed.
    #[error(transparent)]
    Guide(#[from] GuideError),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

/// The only error shape a tool call reports to the client.
#[derive(Debug, Error)]
#[error("Tool execution failed: {0}")]
pub struct ToolExecutionError(#[from] pub ToolError);

impl From<ToolExecutionError> for McpError {
    fn from(err: ToolExecutionError) -> Self {
        McpError::internal_error(err.to_string(), None)
    }
}
