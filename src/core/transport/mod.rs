//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output. The transport owns the
//! connection lifecycle and hands every request to [`McpServer`].
//!
//! [`McpServer`]: crate::core::McpServer

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
