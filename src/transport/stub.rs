//! In-memory transport serving canned JSON payloads
//!
//! Routes match on URL plus a subset of query parameters; the first matching
//! route wins and routes are never consumed. Every request is recorded so
//! callers can assert on what was sent.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::JsonTransport;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct StubRoute {
    url: String,
    params: Vec<(String, String)>,
    response: Value,
}

impl StubRoute {
    fn matches(&self, url: &str, params: &[(&'static str, String)]) -> bool {
        self.url == url
            && self
                .params
                .iter()
                .all(|(k, v)| params.iter().any(|(pk, pv)| pk == k && pv == v))
    }
}

/// A request seen by the stub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// First value for `key`
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in order
    pub fn params_named(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct StubTransport {
    routes: Vec<StubRoute>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `response` for GETs to `url` whose query contains every pair in `params`
    pub fn route(mut self, url: impl Into<String>, params: &[(&str, &str)], response: Value) -> Self {
        self.routes.push(StubRoute {
            url: url.into(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            response,
        });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

#[async_trait]
impl JsonTransport for StubTransport {
    async fn get_json(&self, url: &str, params: &[(&'static str, String)]) -> Result<Value> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedRequest {
                url: url.to_string(),
                params: params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            });

        self.routes
            .iter()
            .find(|route| route.matches(url, params))
            .map(|route| route.response.clone())
            .ok_or_else(|| Error::Status {
                status: 404,
                body: format!("no stub route for {url} {params:?}"),
            })
    }
}
