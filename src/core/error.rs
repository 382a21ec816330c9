//! Error types and handling for the MCP server.
//!
//! This module defines the error type returned while configuring and
//! building the server. Tool calls report through
//! [`ToolExecutionError`](crate::domains::tools::ToolExecutionError) instead.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for server setup.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the guides domain.
    #[error("Guide error: {0}")]
    Guide(#[from] crate::domains::guides::GuideError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
