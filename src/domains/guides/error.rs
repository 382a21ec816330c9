//! Guide fetch error types.

use thiserror::Error;

/// Errors that can occur while talking to the guide API.
#[derive(Debug, Error)]
pub enum GuideError {
    /// The API answered with a non-success status.
    #[error("Failed to fetch {resource}: {status_text}")]
    Fetch {
        resource: String,
        status: u16,
        status_text: String,
    },

    /// The requested topic cannot be turned into a guide path.
    #[error("Invalid topic '{0}': must be non-empty and must not contain path separators or '..'")]
    InvalidTopic(String),

    /// The request could not be sent or the body could not be read.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON document.
    #[error("Failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GuideError {
    /// Create a fetch error from an HTTP status.
    pub fn fetch(resource: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::Fetch {
            resource: resource.into(),
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        }
    }

    /// Create a parse error for the given URL.
    pub fn parse(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            url: url.into(),
            source,
        }
    }
}
