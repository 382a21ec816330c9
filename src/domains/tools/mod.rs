//! Tools domain module.
//!
//! Tools are the functions MCP clients can call. Each one fetches from the
//! guide API and answers with markdown text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool catalog and call dispatch
//! - `render.rs` - Text rendering of guides and guide listings
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `to_tool()` and `handle()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `ToolRegistry::get_all_tools()` and the dispatch in `call_tool()`

pub mod definitions;
mod error;
mod registry;
pub mod render;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ToolError, ToolExecutionError};
pub use registry::ToolRegistry;
