//! Guides domain module.
//!
//! This module wraps the remote AI Developer Guide JSON API:
//!
//! - `model.rs` - documents, index and the flattened guide catalog
//! - `client.rs` - the [`GuideSource`] seam and its HTTP implementation
//! - `error.rs` - fetch error types

mod client;
mod error;
pub mod model;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ConnectivityReport, DEFAULT_BASE_URL, GuideClient, GuideSource};
pub use error::GuideError;
pub use model::{
    ApiEndpoints, ApiIndex, AvailableGuide, GuideCategory, GuideDocument, GuideEndpoint,
    GuideSection, flatten_index,
};
