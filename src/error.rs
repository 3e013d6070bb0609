//! Error types for the entity search engines
//!
//! Only two failures are synthesized locally: a knowledge-graph id with no
//! results (`NotFound`) and a provider-reported error payload (`Provider`).
//! Everything coming from the transport is surfaced as-is.

use thiserror::Error;

/// Main error type for entity search and reconciliation
#[derive(Error, Debug)]
pub enum Error {
    #[error("{engine} id not found: {id}")]
    NotFound { engine: &'static str, id: String },

    #[error("Something went wrong:\n{payload}")]
    Provider { payload: serde_json::Value },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for the locally synthesized not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Raw provider error payload, if this is a provider error
    pub fn provider_payload(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Provider { payload } => Some(payload),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
