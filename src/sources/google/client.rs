//! Google Knowledge Graph Search API client

use std::sync::Arc;

use super::types::KgSearchResponse;
use crate::error::Result;
use crate::transport::{JsonTransport, QueryParams};

pub struct GoogleKgClient {
    transport: Arc<dyn JsonTransport>,
    api_url: String,
    api_key: String,
}

impl GoogleKgClient {
    pub fn new(
        transport: Arc<dyn JsonTransport>,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Run `entities:search` with the given query parameters plus the API key
    pub async fn search(&self, mut params: QueryParams) -> Result<KgSearchResponse> {
        params.push(("key", self.api_key.clone()));
        let payload = self.transport.get_json(&self.api_url, &params).await?;
        Ok(serde_json::from_value(payload)?)
    }
}
