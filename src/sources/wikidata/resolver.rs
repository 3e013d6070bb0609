//! Wikipedia article URL -> Wikidata QID lookup
//!
//! Used by the Google engine to backfill `wiki_id` from the article URL in a
//! knowledge-graph `detailedDescription`.

use std::sync::Arc;

use url::Url;

use super::types::PagePropsResponse;
use crate::error::Result;
use crate::transport::JsonTransport;

pub struct CrossReferenceResolver {
    transport: Arc<dyn JsonTransport>,
    fallback_api_url: String,
}

impl CrossReferenceResolver {
    pub fn new(transport: Arc<dyn JsonTransport>, fallback_api_url: impl Into<String>) -> Self {
        Self {
            transport,
            fallback_api_url: fallback_api_url.into(),
        }
    }

    /// QIDs linked to the article at `url`
    ///
    /// Usually zero or one; redirected or ambiguous titles can return more.
    /// Pages without a `wikibase_item` are dropped.
    pub async fn get_qids_from_wikipedia_url(&self, url: &str) -> Result<Vec<String>> {
        let title = article_title(url);
        let api_url = api_url_for_article(url, &self.fallback_api_url);

        let params = vec![
            ("action", "query".to_string()),
            ("format", "json".to_string()),
            ("titles", title.clone()),
            ("prop", "pageprops".to_string()),
        ];
        let payload = self.transport.get_json(&api_url, &params).await?;
        let response: PagePropsResponse = serde_json::from_value(payload)?;

        let qids: Vec<String> = response
            .query
            .pages
            .into_values()
            .filter_map(|page| page.pageprops.and_then(|props| props.wikibase_item))
            .collect();

        tracing::debug!(title = %title, qids = ?qids, "Resolved Wikipedia title");
        Ok(qids)
    }
}

/// Last path segment of an article URL, percent-decoded
pub fn article_title(url: &str) -> String {
    let raw = match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string(),
        Err(_) => url.rsplit('/').next().unwrap_or_default().to_string(),
    };

    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

/// MediaWiki API for the article's own wiki, or `fallback` off wikipedia.org
fn api_url_for_article(url: &str, fallback: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if host == "wikipedia.org" || host.ends_with(".wikipedia.org") => {
                format!("{}://{}/w/api.php", parsed.scheme(), host)
            }
            _ => fallback.to_string(),
        },
        Err(_) => fallback.to_string(),
    }
}
