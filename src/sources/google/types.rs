//! Google Knowledge Graph Search API response types
//!
//! Reference: https://developers.google.com/knowledge-graph/reference/rest/v1

use serde::{Deserialize, Serialize};

/// Top-level `entities:search` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KgSearchResponse {
    #[serde(rename = "itemListElement", default)]
    pub item_list_element: Vec<KgListItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KgListItem {
    pub result: KgResult,
    #[serde(rename = "resultScore", default)]
    pub result_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KgResult {
    /// Prefixed id, e.g. "kg:/m/0xbm"
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "@type", default)]
    pub types: Option<Vec<String>>,
    /// Short description, e.g. "Football club"
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "detailedDescription", default)]
    pub detailed_description: Option<DetailedDescription>,
    #[serde(default)]
    pub url: Option<String>,
}

impl KgResult {
    pub fn article_body(&self) -> Option<&str> {
        self.detailed_description
            .as_ref()
            .and_then(|d| d.article_body.as_deref())
    }

    /// Wikipedia article backing the detailed description
    pub fn article_url(&self) -> Option<&str> {
        self.detailed_description
            .as_ref()
            .and_then(|d| d.url.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetailedDescription {
    #[serde(rename = "articleBody", default)]
    pub article_body: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
}
