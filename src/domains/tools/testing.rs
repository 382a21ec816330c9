//! In-memory [`GuideSource`] for tool tests.

use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::StatusCode;
use rmcp::model::{CallToolResult, RawContent};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domains::guides::{
    ApiEndpoints, ApiIndex, GuideCategory, GuideDocument, GuideEndpoint, GuideError,
    GuideSection, GuideSource,
};

/// Guide source answering from memory and recording each call.
///
/// Anything not configured fails like a `404 Not Found` from the API.
#[derive(Default)]
pub struct StubGuides {
    main: Option<GuideDocument>,
    guides: HashMap<String, GuideDocument>,
    index: Option<ApiIndex>,
    calls: Mutex<Vec<String>>,
}

impl StubGuides {
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_main_guide(title: &str, content: &str, sections: Vec<GuideSection>) -> Self {
        Self {
            main: Some(document(title, content, sections)),
            ..Self::default()
        }
    }

    pub fn with_guide(key: &str, title: &str, content: &str, sections: Vec<GuideSection>) -> Self {
        let mut stub = Self::default();
        stub.guides
            .insert(key.to_string(), document(title, content, sections));
        stub
    }

    pub fn with_listed(mut self, category: GuideCategory, topic: &str, description: &str) -> Self {
        let index = self.index.get_or_insert_with(empty_index);
        let endpoints = &mut index.endpoints;
        let map = match category {
            GuideCategory::Languages => &mut endpoints.language_guides,
            GuideCategory::Patterns => &mut endpoints.pattern_guides,
            GuideCategory::Platforms => &mut endpoints.platform_guides,
            GuideCategory::Others => &mut endpoints.other_guides,
        };
        map.get_or_insert_with(IndexMap::new).insert(
            topic.to_string(),
            GuideEndpoint {
                path: format!("/api/guides/{}/{}.json", category, topic),
                description: description.to_string(),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GuideSource for StubGuides {
    async fn fetch_api_index(&self) -> Result<ApiIndex, GuideError> {
        self.record("fetch_api_index".to_string());
        self.index
            .clone()
            .ok_or_else(|| GuideError::fetch("API index", StatusCode::NOT_FOUND))
    }

    async fn fetch_main_guide(&self) -> Result<GuideDocument, GuideError> {
        self.record("fetch_main_guide".to_string());
        self.main
            .clone()
            .ok_or_else(|| GuideError::fetch("main guide", StatusCode::NOT_FOUND))
    }

    async fn fetch_guide(
        &self,
        category: GuideCategory,
        topic: &str,
    ) -> Result<GuideDocument, GuideError> {
        let key = format!("{}/{}", category, topic);
        self.record(format!("fetch_guide {}", key));
        self.guides
            .get(&key)
            .cloned()
            .ok_or_else(|| GuideError::fetch(format!("guide {}", key), StatusCode::NOT_FOUND))
    }
}

fn document(title: &str, content: &str, sections: Vec<GuideSection>) -> GuideDocument {
    GuideDocument {
        title: title.to_string(),
        content: content.to_string(),
        sections: Some(sections),
    }
}

fn empty_index() -> ApiIndex {
    ApiIndex {
        name: "AI Developer Guide API".to_string(),
        description: "API for AI Developer Guide".to_string(),
        version: "1.0.0".to_string(),
        source: "https://github.com/dwmkerr/ai-developer-guide".to_string(),
        last_updated: "2024-01-01".to_string(),
        endpoints: ApiEndpoints {
            main_guide: GuideEndpoint {
                path: "/api/guide.json".to_string(),
                description: "Main guide content".to_string(),
            },
            language_guides: None,
            pattern_guides: None,
            platform_guides: None,
            other_guides: None,
        },
    }
}

/// Text of the first content item of a tool result.
pub fn text_of(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {other:?}"),
    }
}
