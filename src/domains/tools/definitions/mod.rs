//! Tool definitions module.
//!
//! Each tool is defined in its own file with its parameters, metadata and
//! execution logic.

pub mod fetch_guide;
pub mod fetch_main_guide;
pub mod list_available_guides;

pub use fetch_guide::{FetchGuideParams, FetchGuideTool};
pub use fetch_main_guide::{FetchMainGuideParams, FetchMainGuideTool};
pub use list_available_guides::{ListAvailableGuidesParams, ListAvailableGuidesTool};

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;

use super::error::ToolError;

/// Deserialize a tool's argument bag into its parameter type.
pub(crate) fn parse_params<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
