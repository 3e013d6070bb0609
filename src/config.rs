//! Engine configuration
//!
//! Endpoints, transport timeout and the knowledge-graph API key. Defaults
//! point at the public production endpoints; every value can be overridden
//! from the environment.

use std::time::Duration;

use crate::error::{Error, Result};

pub const GOOGLE_KG_API_URL: &str = "https://kgsearch.googleapis.com/v1/entities:search";
pub const WIKIDATA_API_URL: &str = "https://www.wikidata.org/w/api.php";
pub const WIKIPEDIA_API_URL: &str = "https://www.wikipedia.org/w/api.php";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!(
    "entity-search-engines/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/miksyr/entity_search_engines)"
);

/// Settings shared by both engines
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Google Knowledge Graph API key (only needed by the Google engine)
    pub google_api_key: Option<String>,
    pub google_api_url: String,
    pub wikidata_api_url: String,
    /// Fallback MediaWiki endpoint for title lookups when the article URL
    /// is not on a wikipedia.org host
    pub wikipedia_api_url: String,
    pub timeout: Duration,
    /// Wikimedia rejects requests without a descriptive User-Agent
    pub user_agent: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_api_url: GOOGLE_KG_API_URL.to_string(),
            wikidata_api_url: WIKIDATA_API_URL.to_string(),
            wikipedia_api_url: WIKIPEDIA_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from environment variables, falling back to defaults
    ///
    /// Reads `GOOGLE_SEARCH_API_KEY`, `ENTITY_SEARCH_TIMEOUT_SECS`,
    /// `ENTITY_SEARCH_USER_AGENT`, `GOOGLE_KG_API_URL`, `WIKIDATA_API_URL`
    /// and `WIKIPEDIA_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        config.google_api_key = lookup("GOOGLE_SEARCH_API_KEY").filter(|k| !k.is_empty());

        if let Some(secs) = lookup("ENTITY_SEARCH_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "ENTITY_SEARCH_TIMEOUT_SECS must be a whole number of seconds, got {secs:?}"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = lookup("ENTITY_SEARCH_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Some(url) = lookup("GOOGLE_KG_API_URL") {
            config.google_api_url = url;
        }
        if let Some(url) = lookup("WIKIDATA_API_URL") {
            config.wikidata_api_url = url;
        }
        if let Some(url) = lookup("WIKIPEDIA_API_URL") {
            config.wikipedia_api_url = url;
        }

        Ok(config)
    }

    pub fn with_google_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.google_api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// API key for the Google engine, or a config error if unset
    pub fn require_google_api_key(&self) -> Result<&str> {
        self.google_api_key
            .as_deref()
            .ok_or_else(|| Error::Config("GOOGLE_SEARCH_API_KEY environment variable not set".into()))
    }
}
