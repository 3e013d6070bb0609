//! JsonTransport trait: the only path by which the engines reach the network.
//!
//! `HttpTransport` talks to the real providers through reqwest;
//! `StubTransport` (feature `test-util`) serves canned payloads for tests
//! and offline use.

pub mod http;
#[cfg(any(test, feature = "test-util"))]
pub mod stub;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use http::HttpTransport;
#[cfg(any(test, feature = "test-util"))]
pub use stub::{RecordedRequest, StubTransport};

/// Query string as ordered key/value pairs. Repeated keys are allowed
/// (the knowledge graph takes one `types` pair per type).
pub type QueryParams = Vec<(&'static str, String)>;

#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// GET `url` with `params` and return the parsed JSON body.
    ///
    /// Transport failures and non-2xx statuses surface unchanged as
    /// `Error::Transport` / `Error::Status`.
    async fn get_json(&self, url: &str, params: &[(&'static str, String)]) -> Result<Value>;
}
