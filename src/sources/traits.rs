//! EntityEngine trait and related types
//!
//! The core abstraction shared by the Google Knowledge Graph and Wikidata engines.

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::Result;

/// Wikidata property groups requested by default on entity fetches
pub const DEFAULT_WIKIDATA_PROPS: &[&str] = &[
    "info",
    "aliases",
    "labels",
    "descriptions",
    "claims",
    "datatype",
];

// =============================================================================
// Argument Structs
// =============================================================================

/// Options for search operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// schema.org type filter (knowledge graph only), e.g. "SportsTeam"
    pub types: Option<Vec<String>>,
    /// Maximum number of results to return (knowledge graph only, 3 when unset)
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(mut self, types: Vec<String>) -> Self {
        self.types = Some(types);
        self
    }

    pub fn with_type(mut self, entity_type: impl Into<String>) -> Self {
        self.types.get_or_insert_with(Vec::new).push(entity_type.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Options for fetching a Wikidata entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Property groups (`props`) to request
    pub properties: Vec<String>,
    /// Language filter (`languages`), pipe-separated if several
    pub languages: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            properties: DEFAULT_WIKIDATA_PROPS.iter().map(|p| p.to_string()).collect(),
            languages: "en".to_string(),
        }
    }
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(mut self, properties: Vec<String>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = languages.into();
        self
    }

    pub(crate) fn props_param(&self) -> String {
        self.properties.join("|")
    }
}

// =============================================================================
// Trait Definition
// =============================================================================

/// Trait for entity search engines
///
/// Each engine queries one external knowledge base and normalizes its rows
/// into [`Entity`], tagging each with the engine's provenance.
///
/// # Implementation Notes
///
/// - Return an empty Vec rather than an error when a search matches nothing
/// - Only take the top result on id lookups; no disambiguation
/// - Set the entity source exactly once, immediately before returning
#[async_trait]
pub trait EntityEngine: Send + Sync {
    /// Unique identifier for this engine (e.g., "google", "wikidata")
    fn source_id(&self) -> &'static str;

    /// Human-readable name
    fn source_name(&self) -> &'static str;

    /// Search for entities by free text, in provider relevance order
    ///
    /// Engines ignore option fields they do not support.
    async fn search_for_entity(
        &self,
        query: &str,
        options: Option<SearchOptions>,
    ) -> Result<Vec<Entity>>;

    /// Fetch one entity by engine-specific id
    async fn get_entity(&self, id: &str) -> Result<Entity>;
}
