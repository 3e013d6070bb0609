//! Wikidata / MediaWiki API response types
//!
//! Reference: https://www.wikidata.org/w/api.php?action=help&modules=wbgetentities

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Fail with `Error::Provider` if the top-level payload carries `error`
pub fn check_provider_error(payload: &Value) -> Result<()> {
    match payload.get("error") {
        Some(error) => Err(Error::Provider {
            payload: error.clone(),
        }),
        None => Ok(()),
    }
}

/// MediaWiki encodes empty objects as `[]`; accept both
fn map_or_empty_array<'de, D, T>(deserializer: D) -> std::result::Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MapOrSeq<T> {
        Map(HashMap<String, T>),
        Seq(Vec<serde::de::IgnoredAny>),
    }

    Ok(match Option::<MapOrSeq<T>>::deserialize(deserializer)? {
        Some(MapOrSeq::Map(map)) => map,
        Some(MapOrSeq::Seq(_)) | None => HashMap::new(),
    })
}

// =============================================================================
// wbgetentities
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GetEntitiesResponse {
    #[serde(default)]
    pub entities: HashMap<String, WikidataEntity>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WikidataEntity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    #[serde(default, deserialize_with = "map_or_empty_array")]
    pub labels: HashMap<String, LanguageValue>,
    #[serde(default, deserialize_with = "map_or_empty_array")]
    pub descriptions: HashMap<String, LanguageValue>,
    #[serde(default, deserialize_with = "map_or_empty_array")]
    pub aliases: HashMap<String, Vec<LanguageValue>>,
    #[serde(default, deserialize_with = "map_or_empty_array")]
    pub claims: HashMap<String, Vec<Claim>>,
    /// Present (as an empty string) when the id does not exist
    #[serde(default)]
    pub missing: Option<Value>,
    #[serde(default)]
    pub redirects: Option<Redirect>,
}

impl WikidataEntity {
    pub fn is_missing(&self) -> bool {
        self.missing.is_some()
    }

    pub fn label(&self, language: &str) -> Option<&str> {
        self.labels.get(language).map(|v| v.value.as_str())
    }

    pub fn description(&self, language: &str) -> Option<&str> {
        self.descriptions.get(language).map(|v| v.value.as_str())
    }

    pub fn aliases(&self, language: &str) -> Vec<String> {
        self.aliases
            .get(language)
            .map(|aliases| aliases.iter().map(|a| a.value.clone()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LanguageValue {
    pub language: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

/// A single property-value assertion
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Claim {
    #[serde(default)]
    pub mainsnak: Option<Snak>,
    #[serde(default)]
    pub rank: Option<String>,
}

impl Claim {
    /// `mainsnak.datavalue.value`, if the whole path is present
    pub fn main_value(&self) -> Option<&Value> {
        self.mainsnak
            .as_ref()?
            .datavalue
            .as_ref()?
            .value
            .as_ref()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Snak {
    /// "value", "somevalue" or "novalue"
    #[serde(default)]
    pub snaktype: Option<String>,
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub datavalue: Option<DataValue>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataValue {
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(rename = "type", default)]
    pub value_type: Option<String>,
}

// =============================================================================
// wbsearchentities
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SearchEntitiesResponse {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub concepturi: Option<String>,
}

// =============================================================================
// action=query&prop=pageprops
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct PagePropsResponse {
    pub query: PagePropsQuery,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagePropsQuery {
    /// Keyed by page id ("-1", "-2", ... for missing titles)
    #[serde(default, deserialize_with = "btree_or_empty_array")]
    pub pages: BTreeMap<String, Page>,
}

fn btree_or_empty_array<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, Page>, D::Error>
where
    D: Deserializer<'de>,
{
    map_or_empty_array(deserializer).map(|map: HashMap<String, Page>| map.into_iter().collect())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pageprops: Option<PageProps>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageProps {
    #[serde(default)]
    pub wikibase_item: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_provider_error() {
        assert!(check_provider_error(&json!({"entities": {}})).is_ok());

        let err = check_provider_error(&json!({
            "error": {"code": "no-such-entity", "info": "Could not find an entity with the ID \"1\"."}
        }))
        .unwrap_err();
        assert_eq!(
            err.provider_payload().unwrap()["code"],
            json!("no-such-entity")
        );
    }

    #[test]
    fn test_empty_array_claims_are_accepted() {
        let entity: WikidataEntity = serde_json::from_value(json!({
            "id": "Q1",
            "labels": {"en": {"language": "en", "value": "Universe"}},
            "aliases": [],
            "claims": []
        }))
        .unwrap();

        assert_eq!(entity.label("en"), Some("Universe"));
        assert!(entity.aliases("en").is_empty());
        assert!(entity.claims.is_empty());
        assert!(!entity.is_missing());
    }

    #[test]
    fn test_claim_main_value_paths() {
        let full: Claim = serde_json::from_value(json!({
            "mainsnak": {"snaktype": "value", "property": "P646",
                         "datavalue": {"value": "/m/0xbm", "type": "string"}},
            "rank": "normal"
        }))
        .unwrap();
        assert_eq!(full.main_value(), Some(&json!("/m/0xbm")));

        let novalue: Claim = serde_json::from_value(json!({
            "mainsnak": {"snaktype": "novalue", "property": "P646"}
        }))
        .unwrap();
        assert_eq!(novalue.main_value(), None);

        let bare: Claim = serde_json::from_value(json!({"rank": "normal"})).unwrap();
        assert_eq!(bare.main_value(), None);
    }

    #[test]
    fn test_missing_entity_flag() {
        let response: GetEntitiesResponse = serde_json::from_value(json!({
            "entities": {"Q999999999": {"id": "Q999999999", "missing": ""}}
        }))
        .unwrap();
        assert!(response.entities["Q999999999"].is_missing());
    }
}
