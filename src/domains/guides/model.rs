//! Data model for the AI Developer Guide JSON API.
//!
//! These types mirror the documents served by the remote endpoint. They are
//! created per request and never cached.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single guide document (`/api/guide.json` or `/api/guides/{category}/{topic}.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideDocument {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<GuideSection>>,
}

/// A titled section within a [`GuideDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideSection {
    pub title: String,
    pub content: String,
}

/// Root catalog of the API (`/api.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIndex {
    pub name: String,
    pub description: String,
    pub version: String,
    pub source: String,
    pub last_updated: String,
    pub endpoints: ApiEndpoints,
}

/// Endpoint listing of the API index.
///
/// Guide maps keep JSON-object key order as received, which is the order
/// topics are listed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoints {
    pub main_guide: GuideEndpoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_guides: Option<IndexMap<String, GuideEndpoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_guides: Option<IndexMap<String, GuideEndpoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_guides: Option<IndexMap<String, GuideEndpoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_guides: Option<IndexMap<String, GuideEndpoint>>,
}

impl ApiEndpoints {
    /// Guide map for a category, if the index carries one.
    pub fn guides(&self, category: GuideCategory) -> Option<&IndexMap<String, GuideEndpoint>> {
        match category {
            GuideCategory::Languages => self.language_guides.as_ref(),
            GuideCategory::Patterns => self.pattern_guides.as_ref(),
            GuideCategory::Platforms => self.platform_guides.as_ref(),
            GuideCategory::Others => self.other_guides.as_ref(),
        }
    }
}

/// Path and description of one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideEndpoint {
    pub path: String,
    pub description: String,
}

/// Guide categories understood by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[schemars(inline)]
pub enum GuideCategory {
    Languages,
    Patterns,
    Platforms,
    Others,
}

impl GuideCategory {
    /// All categories, in listing order.
    pub const ALL: [GuideCategory; 4] = [
        GuideCategory::Languages,
        GuideCategory::Patterns,
        GuideCategory::Platforms,
        GuideCategory::Others,
    ];

    /// Path segment and display key of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideCategory::Languages => "languages",
            GuideCategory::Patterns => "patterns",
            GuideCategory::Platforms => "platforms",
            GuideCategory::Others => "others",
        }
    }
}

impl fmt::Display for GuideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flattened catalog entry derived from the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableGuide {
    pub category: GuideCategory,
    pub topic: String,
    pub description: String,
    pub path: String,
}

/// Flatten the index into one entry per guide.
///
/// Categories come in [`GuideCategory::ALL`] order; topics within a
/// category keep the order they had in the JSON object. Missing index
/// fields contribute nothing.
pub fn flatten_index(index: &ApiIndex) -> Vec<AvailableGuide> {
    GuideCategory::ALL
        .iter()
        .filter_map(|category| {
            index
                .endpoints
                .guides(*category)
                .map(|guides| (*category, guides))
        })
        .flat_map(|(category, guides)| {
            guides.iter().map(move |(topic, endpoint)| AvailableGuide {
                category,
                topic: topic.clone(),
                description: endpoint.description.clone(),
                path: endpoint.path.clone(),
            })
        })
        .collect()
}
