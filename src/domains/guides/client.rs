//! HTTP client for the AI Developer Guide JSON API.
//!
//! [`GuideClient`] turns HTTP outcomes into typed documents or typed errors.
//! Every call goes to the network; nothing is cached and nothing is retried.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

use super::error::GuideError;
use super::model::{ApiIndex, AvailableGuide, GuideCategory, GuideDocument, flatten_index};
use crate::core::config::GuideConfig;

/// Public endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://dwmkerr.github.io/ai-developer-guide";

/// Source of guide documents.
///
/// The tool router only depends on this trait, so it can be driven by
/// anything that produces guides.
#[async_trait]
pub trait GuideSource: Send + Sync {
    /// Fetch the API index (`{base}/api.json`).
    async fn fetch_api_index(&self) -> Result<ApiIndex, GuideError>;

    /// Fetch the main guide (`{base}/api/guide.json`).
    async fn fetch_main_guide(&self) -> Result<GuideDocument, GuideError>;

    /// Fetch one guide (`{base}/api/guides/{category}/{topic}.json`).
    async fn fetch_guide(
        &self,
        category: GuideCategory,
        topic: &str,
    ) -> Result<GuideDocument, GuideError>;

    /// List every guide in the index.
    ///
    /// Never fails: any error is logged and an empty list is returned.
    async fn list_available_guides(&self) -> Vec<AvailableGuide> {
        match self.fetch_api_index().await {
            Ok(index) => flatten_index(&index),
            Err(e) => {
                error!("Failed to list guides: {}", e);
                Vec::new()
            }
        }
    }
}

/// Summary produced by [`GuideClient::check_connectivity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityReport {
    pub name: String,
    pub version: String,
    pub guide_count: usize,
}

/// `reqwest`-backed [`GuideSource`].
#[derive(Debug, Clone)]
pub struct GuideClient {
    base_url: String,
    http: reqwest::Client,
}

impl GuideClient {
    /// Create a client for the given base URL (trailing slash removed).
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Self {
        let base_url = base_url.as_ref();
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url).to_string();
        Self { base_url, http }
    }

    /// Build a client from configuration, applying the request timeout if set.
    pub fn from_config(config: &GuideConfig) -> Result<Self, GuideError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::with_http_client(&config.base_url, builder.build()?))
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the index and the guide list, as done by the `check` command.
    pub async fn check_connectivity(&self) -> Result<ConnectivityReport, GuideError> {
        let index = self.fetch_api_index().await?;
        let guides = self.list_available_guides().await;
        Ok(ConnectivityReport {
            name: index.name,
            version: index.version,
            guide_count: guides.len(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
    ) -> Result<T, GuideError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GuideError::fetch(resource, status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GuideError::parse(url, e))
    }
}

impl Default for GuideClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl GuideSource for GuideClient {
    async fn fetch_api_index(&self) -> Result<ApiIndex, GuideError> {
        self.get_json("/api.json", "API index").await
    }

    async fn fetch_main_guide(&self) -> Result<GuideDocument, GuideError> {
        self.get_json("/api/guide.json", "main guide").await
    }

    async fn fetch_guide(
        &self,
        category: GuideCategory,
        topic: &str,
    ) -> Result<GuideDocument, GuideError> {
        validate_topic(topic)?;
        let path = format!("/api/guides/{}/{}.json", category, topic);
        let resource = format!("guide {}/{}", category, topic);
        self.get_json(&path, &resource).await
    }
}

/// Reject topics that would escape the guide directory.
fn validate_topic(topic: &str) -> Result<(), GuideError> {
    if topic.is_empty() || topic.contains('/') || topic.contains('\\') || topic.contains("..") {
        return Err(GuideError::InvalidTopic(topic.to_string()));
    }
    Ok(())
}
