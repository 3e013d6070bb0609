//! Wikidata EntityEngine implementation

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::Error as _;
use serde_json::Value;

use super::batch::{batch_wiki_ids, WIKI_ID_BATCH_SIZE};
use super::client::WikidataClient;
use super::normalize::{extract_property_from_entity_claims, process_result};
use super::resolver::CrossReferenceResolver;
use super::types::{GetEntitiesResponse, WikidataEntity};
use crate::config::EngineConfig;
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::sources::traits::{EntityEngine, FetchOptions, SearchOptions};
use crate::transport::{HttpTransport, JsonTransport};

const ENGINE: &str = "wikidata";

/// Property values per QID: property id -> extracted value (None when the
/// claim exists but carries no value)
pub type WikiIdProperties = HashMap<String, HashMap<String, Option<Value>>>;

/// Wikidata search engine
pub struct WikidataEntityEngine {
    client: WikidataClient,
    resolver: CrossReferenceResolver,
}

impl WikidataEntityEngine {
    /// Create an engine talking to the configured endpoints over HTTP
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let transport: Arc<dyn JsonTransport> = Arc::new(HttpTransport::new(config)?);
        Ok(Self::with_transport(transport, config))
    }

    /// Create with an existing transport
    pub fn with_transport(transport: Arc<dyn JsonTransport>, config: &EngineConfig) -> Self {
        Self {
            client: WikidataClient::new(Arc::clone(&transport), config.wikidata_api_url.clone()),
            resolver: CrossReferenceResolver::new(transport, config.wikipedia_api_url.clone()),
        }
    }

    pub fn resolver(&self) -> &CrossReferenceResolver {
        &self.resolver
    }

    /// Fetch one entity with explicit property groups and languages
    ///
    /// A record the provider flags `missing` still normalizes: the entity
    /// carries its `wiki_id` and nothing else.
    pub async fn get_entity_with(&self, wiki_id: &str, options: FetchOptions) -> Result<Entity> {
        let response = self.client.get_entities(&[wiki_id], &options).await?;

        let record = select_record(&response, wiki_id).ok_or_else(|| {
            Error::Decode(serde_json::Error::custom(format!(
                "wbgetentities returned no record for {wiki_id}"
            )))
        })?;
        if record.is_missing() {
            tracing::debug!(wiki_id = %wiki_id, "Wikidata reports entity as missing");
        }
        Ok(process_result(record))
    }

    /// Fetch many entities in batched wbgetentities calls
    ///
    /// Entities come back in input order, `missing` records included as
    /// bare entities; ids the provider does not return at all are skipped.
    pub async fn get_entities(&self, wiki_ids: &[String], options: FetchOptions) -> Result<Vec<Entity>> {
        let mut records: HashMap<String, WikidataEntity> = HashMap::new();

        for batch in batch_wiki_ids(wiki_ids, WIKI_ID_BATCH_SIZE) {
            let response = self.client.get_entities(batch, &options).await?;
            records.extend(response.entities);
        }

        Ok(wiki_ids
            .iter()
            .filter_map(|id| find_record(&records, id))
            .map(process_result)
            .collect())
    }

    /// Claim values for `property_ids` on every id in `wiki_ids`
    ///
    /// Requests go out one batch at a time; a provider error in any batch
    /// fails the whole call.
    pub async fn get_properties_of_wiki_ids(
        &self,
        wiki_ids: &[String],
        property_ids: &[String],
        languages: &str,
    ) -> Result<WikiIdProperties> {
        let options = FetchOptions::default().with_languages(languages);
        let batches = batch_wiki_ids(wiki_ids, WIKI_ID_BATCH_SIZE);
        let total = batches.len();
        let mut properties = WikiIdProperties::new();

        for (index, batch) in batches.into_iter().enumerate() {
            tracing::info!(
                batch = index + 1,
                of = total,
                ids = batch.len(),
                "Getting properties for batched wikiIds"
            );

            let response = self.client.get_entities(batch, &options).await?;
            for (wiki_id, record) in response.entities {
                let extracted =
                    extract_property_from_entity_claims(&wiki_id, &record.claims, property_ids);
                properties.insert(wiki_id, extracted);
            }
        }

        Ok(properties)
    }

    /// Search, then fetch all hits in one batched request
    ///
    /// Same results as [`EntityEngine::search_for_entity`] without one
    /// request per hit.
    pub async fn search_for_entity_batched(&self, query: &str) -> Result<Vec<Entity>> {
        let hits = self.client.search_entities(query).await?;
        let ids: Vec<String> = hits.search.into_iter().map(|hit| hit.id).collect();
        self.get_entities(&ids, FetchOptions::default()).await
    }

    /// QIDs for a Wikipedia article URL
    pub async fn get_qids_from_wikipedia_url(&self, url: &str) -> Result<Vec<String>> {
        self.resolver.get_qids_from_wikipedia_url(url).await
    }
}

/// The record for `wiki_id`, or the only record when the provider re-keyed it
fn select_record<'a>(response: &'a GetEntitiesResponse, wiki_id: &str) -> Option<&'a WikidataEntity> {
    response
        .entities
        .get(wiki_id)
        .or_else(|| response.entities.values().next())
}

fn find_record<'a>(records: &'a HashMap<String, WikidataEntity>, wiki_id: &str) -> Option<&'a WikidataEntity> {
    records.get(wiki_id).or_else(|| {
        records.values().find(|record| {
            record
                .redirects
                .as_ref()
                .is_some_and(|redirect| redirect.from == wiki_id)
        })
    })
}

#[async_trait]
impl EntityEngine for WikidataEntityEngine {
    fn source_id(&self) -> &'static str {
        ENGINE
    }

    fn source_name(&self) -> &'static str {
        "Wikidata"
    }

    /// Search Wikidata, then fetch each hit with its own wbgetentities call
    async fn search_for_entity(
        &self,
        query: &str,
        _options: Option<SearchOptions>,
    ) -> Result<Vec<Entity>> {
        let hits = self.client.search_entities(query).await?;

        let mut entities = Vec::with_capacity(hits.search.len());
        for hit in hits.search {
            entities.push(self.get_entity(&hit.id).await?);
        }
        Ok(entities)
    }

    async fn get_entity(&self, id: &str) -> Result<Entity> {
        self.get_entity_with(id, FetchOptions::default()).await
    }
}
