//! AI Developer Guide MCP server library.
//!
//! Exposes the guides of the AI Developer Guide JSON API as MCP tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP handler and the STDIO transport
//! - **domains**: business logic organized by bounded contexts
//!   - **guides**: client for the remote JSON API
//!   - **tools**: the `fetch_main_guide`, `fetch_guide` and `list_available_guides` tools
//!
//! # Example
//!
//! ```rust,no_run
//! use ai_developer_guide_mcp::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
