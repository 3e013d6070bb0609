//! Shared fixtures for engine integration tests
//!
//! Payloads mirror real Knowledge Graph / Wikidata responses for Arsenal F.C.,
//! trimmed to the fields the engines read.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use entity_search_engines::config::{GOOGLE_KG_API_URL, WIKIDATA_API_URL};
use entity_search_engines::transport::RecordedRequest;
use entity_search_engines::{EngineConfig, JsonTransport, Result, StubTransport};
use serde_json::{json, Value};

pub const API_KEY: &str = "test-api-key";
pub const ENWIKI_API_URL: &str = "https://en.wikipedia.org/w/api.php";

pub const ARSENAL_NAME: &str = "Arsenal F.C.";
pub const ARSENAL_GOOGLE_ID: &str = "/m/0xbm";
pub const ARSENAL_QID: &str = "Q9617";
pub const ARSENAL_TYPE: &str = "SportsTeam";
pub const ARSENAL_WIKI_URL: &str = "https://en.wikipedia.org/wiki/Arsenal_F.C.";

pub const NONSENSE_QUERY: &str = "jfhsgjfdgjfdbvjghsbvfknsbdfgshgiur";

pub fn config() -> EngineConfig {
    EngineConfig::default().with_google_api_key(API_KEY)
}

// ============================================================================
// Google Knowledge Graph payloads
// ============================================================================

pub fn kg_arsenal_result() -> Value {
    json!({
        "@type": "EntitySearchResult",
        "result": {
            "@id": format!("kg:{ARSENAL_GOOGLE_ID}"),
            "name": ARSENAL_NAME,
            "@type": [ARSENAL_TYPE, "Organization", "Thing"],
            "description": "Football club",
            "detailedDescription": {
                "articleBody": "Arsenal Football Club is a professional football club based in Islington, London, England.",
                "url": ARSENAL_WIKI_URL,
                "license": "https://en.wikipedia.org/wiki/Wikipedia:Text_of_Creative_Commons_Attribution-ShareAlike_3.0_Unported_License"
            },
            "url": "http://www.arsenal.com/"
        },
        "resultScore": 2150.8
    })
}

pub fn kg_arsenal_womens_result() -> Value {
    json!({
        "@type": "EntitySearchResult",
        "result": {
            "@id": "kg:/m/02_lfb",
            "name": "Arsenal W.F.C.",
            "@type": [ARSENAL_TYPE, "Organization", "Thing"],
            "description": "Football club"
        },
        "resultScore": 540.2
    })
}

pub fn kg_list(items: Vec<Value>) -> Value {
    json!({
        "@context": {"@vocab": "http://schema.org/", "kg": "http://g.co/kg"},
        "@type": "ItemList",
        "itemListElement": items
    })
}

pub fn enwiki_arsenal_pageprops() -> Value {
    json!({
        "batchcomplete": "",
        "query": {"pages": {"2174": {
            "pageid": 2174,
            "ns": 0,
            "title": ARSENAL_NAME,
            "pageprops": {"wikibase_item": ARSENAL_QID, "wikibase-shortdesc": "Association football club in London, England"}
        }}}
    })
}

/// Stub serving the Knowledge Graph and enwiki endpoints
pub fn google_stub() -> StubTransport {
    with_google_routes(StubTransport::new())
}

pub fn with_google_routes(stub: StubTransport) -> StubTransport {
    stub
        .route(
            GOOGLE_KG_API_URL,
            &[("ids", ARSENAL_GOOGLE_ID), ("key", API_KEY)],
            kg_list(vec![kg_arsenal_result()]),
        )
        .route(
            GOOGLE_KG_API_URL,
            &[("query", "Arsenal"), ("key", API_KEY)],
            kg_list(vec![kg_arsenal_result(), kg_arsenal_womens_result()]),
        )
        .route(GOOGLE_KG_API_URL, &[("key", API_KEY)], kg_list(vec![]))
        .route(
            ENWIKI_API_URL,
            &[("action", "query"), ("titles", "Arsenal_F.C."), ("prop", "pageprops")],
            enwiki_arsenal_pageprops(),
        )
}

// ============================================================================
// Wikidata payloads
// ============================================================================

pub fn string_claim(property: &str, value: &str) -> Value {
    json!({
        "mainsnak": {
            "snaktype": "value",
            "property": property,
            "datavalue": {"value": value, "type": "string"},
            "datatype": "external-id"
        },
        "type": "statement",
        "rank": "normal"
    })
}

pub fn item_claim(property: &str, qid: &str) -> Value {
    json!({
        "mainsnak": {
            "snaktype": "value",
            "property": property,
            "datavalue": {
                "value": {"entity-type": "item", "numeric-id": qid.trim_start_matches('Q').parse::<u64>().unwrap_or(0), "id": qid},
                "type": "wikibase-entityid"
            },
            "datatype": "wikibase-item"
        },
        "type": "statement",
        "rank": "normal"
    })
}

pub fn wd_arsenal_record() -> Value {
    json!({
        "pageid": 10378,
        "ns": 0,
        "title": ARSENAL_QID,
        "type": "item",
        "id": ARSENAL_QID,
        "labels": {"en": {"language": "en", "value": ARSENAL_NAME}},
        "descriptions": {"en": {"language": "en", "value": "association football club in London, England"}},
        "aliases": {"en": [
            {"language": "en", "value": "Arsenal"},
            {"language": "en", "value": "Arsenal FC"},
            {"language": "en", "value": "The Gunners"}
        ]},
        "claims": {
            "P31": [item_claim("P31", "Q476028")],
            "P646": [string_claim("P646", ARSENAL_GOOGLE_ID)]
        }
    })
}

/// An item carrying two distinct Google ids (P2671 and P646)
pub fn wd_ambiguous_record() -> Value {
    json!({
        "type": "item",
        "id": "Q1422",
        "labels": {"en": {"language": "en", "value": "Arsenal W.F.C."}},
        "claims": {
            "P2671": [string_claim("P2671", "/g/11c5s3_4hr")],
            "P646": [string_claim("P646", "/m/02_lfb")]
        }
    })
}

pub fn wd_entities(records: Vec<Value>) -> Value {
    let entities: serde_json::Map<String, Value> = records
        .into_iter()
        .map(|record| (record["id"].as_str().unwrap_or_default().to_string(), record))
        .collect();
    json!({"entities": entities, "success": 1})
}

pub fn wd_search_hits(ids: &[&str]) -> Value {
    let hits: Vec<Value> = ids
        .iter()
        .map(|id| json!({"id": id, "title": id, "concepturi": format!("http://www.wikidata.org/entity/{id}"), "match": {"type": "label"}}))
        .collect();
    json!({"searchinfo": {"search": "Arsenal FC"}, "search": hits, "success": 1})
}

/// Stub serving wbsearchentities / wbgetentities for the Arsenal items
pub fn wikidata_stub() -> StubTransport {
    with_wikidata_routes(StubTransport::new())
}

pub fn with_wikidata_routes(stub: StubTransport) -> StubTransport {
    stub
        .route(
            WIKIDATA_API_URL,
            &[("action", "wbsearchentities"), ("search", "Arsenal FC")],
            wd_search_hits(&[ARSENAL_QID, "Q1422"]),
        )
        .route(
            WIKIDATA_API_URL,
            &[("action", "wbsearchentities")],
            json!({"searchinfo": {"search": NONSENSE_QUERY}, "search": [], "success": 1}),
        )
        .route(
            WIKIDATA_API_URL,
            &[("action", "wbgetentities"), ("ids", ARSENAL_QID)],
            wd_entities(vec![wd_arsenal_record()]),
        )
        .route(
            WIKIDATA_API_URL,
            &[("action", "wbgetentities"), ("ids", "Q1422")],
            wd_entities(vec![wd_ambiguous_record()]),
        )
        .route(
            WIKIDATA_API_URL,
            &[("action", "wbgetentities"), ("ids", "Q9617|Q1422")],
            wd_entities(vec![wd_arsenal_record(), wd_ambiguous_record()]),
        )
        .route(
            WIKIDATA_API_URL,
            &[("action", "wbgetentities"), ("ids", "1")],
            json!({
                "error": {
                    "code": "no-such-entity",
                    "info": "Could not find an entity with the ID \"1\".",
                    "id": "1",
                    "*": "See https://www.wikidata.org/w/api.php for API usage."
                },
                "servedby": "mw1234"
            }),
        )
}

// ============================================================================
// Generated wbgetentities responses
// ============================================================================

/// Answers every wbgetentities call with one record per requested id,
/// each carrying a P31 claim and a valueless P18 claim
#[derive(Default)]
pub struct GeneratedEntitiesTransport {
    requests: Mutex<Vec<RecordedRequest>>,
}

impl GeneratedEntitiesTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonTransport for GeneratedEntitiesTransport {
    async fn get_json(&self, url: &str, params: &[(&'static str, String)]) -> Result<Value> {
        let request = RecordedRequest {
            url: url.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        };
        let ids: Vec<String> = request
            .param("ids")
            .unwrap_or_default()
            .split('|')
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        self.requests.lock().unwrap().push(request);

        let records = ids
            .iter()
            .map(|id| {
                json!({
                    "type": "item",
                    "id": id,
                    "claims": {
                        "P31": [item_claim("P31", "Q5")],
                        "P18": [{"mainsnak": {"snaktype": "somevalue", "property": "P18"}, "rank": "normal"}]
                    }
                })
            })
            .collect();
        Ok(wd_entities(records))
    }
}
