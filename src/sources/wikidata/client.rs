//! Wikidata API client
//!
//! Thin typed wrapper over the wbgetentities and wbsearchentities actions.

use std::sync::Arc;

use super::types::{check_provider_error, GetEntitiesResponse, SearchEntitiesResponse};
use crate::error::Result;
use crate::sources::traits::FetchOptions;
use crate::transport::JsonTransport;

pub struct WikidataClient {
    transport: Arc<dyn JsonTransport>,
    api_url: String,
}

impl WikidataClient {
    pub fn new(transport: Arc<dyn JsonTransport>, api_url: impl Into<String>) -> Self {
        Self {
            transport,
            api_url: api_url.into(),
        }
    }

    /// wbgetentities for one or more ids (joined with `|`)
    pub async fn get_entities<S: AsRef<str>>(
        &self,
        ids: &[S],
        options: &FetchOptions,
    ) -> Result<GetEntitiesResponse> {
        let ids = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("|");
        let params = vec![
            ("action", "wbgetentities".to_string()),
            ("format", "json".to_string()),
            ("ids", ids),
            ("props", options.props_param()),
            ("languages", options.languages.clone()),
        ];

        let payload = self.transport.get_json(&self.api_url, &params).await?;
        check_provider_error(&payload)?;
        Ok(serde_json::from_value(payload)?)
    }

    /// wbsearchentities over English labels and aliases
    pub async fn search_entities(&self, query: &str) -> Result<SearchEntitiesResponse> {
        let params = vec![
            ("action", "wbsearchentities".to_string()),
            ("format", "json".to_string()),
            ("language", "en".to_string()),
            ("search", query.to_string()),
        ];

        let payload = self.transport.get_json(&self.api_url, &params).await?;
        check_provider_error(&payload)?;
        Ok(serde_json::from_value(payload)?)
    }
}
