//! reqwest-backed transport

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::JsonTransport;
use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// HTTP transport shared by both engines
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { http })
    }

    /// Wrap an already-configured reqwest client
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl JsonTransport for HttpTransport {
    async fn get_json(&self, url: &str, params: &[(&'static str, String)]) -> Result<Value> {
        let started = Instant::now();

        let response = self.http.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect::<String>(),
            });
        }

        let text = response.text().await?;
        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            bytes = text.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Provider request complete"
        );

        Ok(serde_json::from_str(&text)?)
    }
}
