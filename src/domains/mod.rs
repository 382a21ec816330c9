//! Domains module containing business logic organized by bounded contexts.
//!
//! - **guides**: client for the remote AI Developer Guide JSON API
//! - **tools**: MCP tools exposing the guides to clients

pub mod guides;
pub mod tools;
