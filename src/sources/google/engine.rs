//! Google Knowledge Graph EntityEngine implementation

use std::sync::Arc;

use async_trait::async_trait;

use super::client::GoogleKgClient;
use super::normalize::{normalize_result, strip_kg_prefix};
use super::types::KgResult;
use crate::config::EngineConfig;
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::sources::traits::{EntityEngine, SearchOptions};
use crate::sources::wikidata::CrossReferenceResolver;
use crate::transport::{HttpTransport, JsonTransport, QueryParams};

const ENGINE: &str = "Google";

/// Results returned by a search when no options are given
pub const DEFAULT_SEARCH_LIMIT: usize = 3;

/// Google Knowledge Graph search engine
pub struct GoogleEntityEngine {
    client: GoogleKgClient,
    resolver: CrossReferenceResolver,
}

impl GoogleEntityEngine {
    /// Create an engine from config; requires the Google API key
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let transport: Arc<dyn JsonTransport> = Arc::new(HttpTransport::new(config)?);
        Self::with_transport(transport, config)
    }

    /// Create with an existing transport
    pub fn with_transport(transport: Arc<dyn JsonTransport>, config: &EngineConfig) -> Result<Self> {
        let api_key = config.require_google_api_key()?;
        Ok(Self {
            client: GoogleKgClient::new(
                Arc::clone(&transport),
                config.google_api_url.clone(),
                api_key,
            ),
            resolver: CrossReferenceResolver::new(transport, config.wikipedia_api_url.clone()),
        })
    }

    async fn search(&self, params: QueryParams) -> Result<Vec<Entity>> {
        let response = self.client.search(params).await?;

        let mut entities = Vec::with_capacity(response.item_list_element.len());
        for item in &response.item_list_element {
            entities.push(self.entity_from_result(&item.result).await?);
        }
        Ok(entities)
    }

    /// Normalize one result, resolving its Wikipedia article to QIDs first
    async fn entity_from_result(&self, result: &KgResult) -> Result<Entity> {
        let wiki_ids = match result.article_url() {
            Some(url) => self.resolver.get_qids_from_wikipedia_url(url).await?,
            None => Vec::new(),
        };
        Ok(normalize_result(result, &wiki_ids))
    }
}

fn search_params(query: &str, options: Option<SearchOptions>) -> QueryParams {
    let options = options.unwrap_or_default();

    let mut params: QueryParams = vec![("query", query.to_string())];
    for entity_type in options.types.into_iter().flatten() {
        params.push(("types", entity_type));
    }
    let limit = options.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    params.push(("limit", limit.to_string()));
    params
}

#[async_trait]
impl EntityEngine for GoogleEntityEngine {
    fn source_id(&self) -> &'static str {
        "google"
    }

    fn source_name(&self) -> &'static str {
        "Google Knowledge Graph"
    }

    async fn search_for_entity(
        &self,
        query: &str,
        options: Option<SearchOptions>,
    ) -> Result<Vec<Entity>> {
        self.search(search_params(query, options)).await
    }

    /// Look up a knowledge-graph id, with or without its `kg:` prefix
    async fn get_entity(&self, id: &str) -> Result<Entity> {
        let google_id = strip_kg_prefix(id);

        self.search(vec![("ids", google_id.to_string())])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound {
                engine: ENGINE,
                id: google_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::StubTransport;

    #[test]
    fn test_search_params_default_limit() {
        let params = search_params("Arsenal", None);
        assert_eq!(
            params,
            vec![("query", "Arsenal".to_string()), ("limit", "3".to_string())]
        );
    }

    #[test]
    fn test_search_params_repeat_types() {
        let params = search_params(
            "Arsenal",
            Some(SearchOptions::new().with_type("SportsTeam").with_type("Organization")),
        );
        assert_eq!(
            params,
            vec![
                ("query", "Arsenal".to_string()),
                ("types", "SportsTeam".to_string()),
                ("types", "Organization".to_string()),
                ("limit", "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_params_explicit_limit() {
        let params = search_params("Arsenal", Some(SearchOptions::new().with_limit(25)));
        assert_eq!(
            params,
            vec![("query", "Arsenal".to_string()), ("limit", "25".to_string())]
        );
    }

    #[test]
    fn test_requires_api_key() {
        let stub: Arc<dyn JsonTransport> = Arc::new(StubTransport::new());
        let result = GoogleEntityEngine::with_transport(stub, &EngineConfig::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
