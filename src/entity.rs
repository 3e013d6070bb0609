//! Unified entity record
//!
//! One real-world thing as known to the Google Knowledge Graph, Wikidata,
//! or both. Engines build a fresh `Entity` per response row and tag it with
//! its provenance before handing it back.

use serde::{Deserialize, Serialize};

const GOOGLE_LINK: &str = "https://www.google.com/search?q=";
const WIKIDATA_SEARCH_LINK: &str = "https://www.wikidata.org/w/index.php?search=";
const WIKIDATA_GET_LINK: &str = "https://wikidata.org/wiki/";

/// Which engine produced an entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntitySource {
    Google,
    Wikidata,
    Other(String),
}

impl EntitySource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Google => "Google",
            Self::Wikidata => "wikidata",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for EntitySource {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Google" => Self::Google,
            "wikidata" => Self::Wikidata,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for EntitySource {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<EntitySource> for String {
    fn from(source: EntitySource) -> Self {
        source.as_str().to_string()
    }
}

impl std::fmt::Display for EntitySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// General record for an entity, holding both Google and Wikidata info
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub entity_name: Option<String>,
    /// Pipe-delimited type labels (knowledge graph only)
    pub entity_type: Option<String>,
    pub wiki_id: Option<String>,
    pub wikidata_description: Option<String>,
    pub google_id: Option<String>,
    pub google_description: Option<String>,
    #[serde(default)]
    pub surface_forms: Vec<String>,
    #[serde(default)]
    entity_source: Option<EntitySource>,
}

impl Entity {
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: Some(entity_name.into()),
            ..Self::default()
        }
    }

    /// Entity with no known name (e.g. a Wikidata item lacking an English label)
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn with_entity_type(mut self, entity_type: Option<String>) -> Self {
        self.entity_type = entity_type;
        self
    }

    pub fn with_wiki_id(mut self, wiki_id: Option<String>) -> Self {
        self.wiki_id = wiki_id;
        self
    }

    pub fn with_wikidata_description(mut self, description: Option<String>) -> Self {
        self.wikidata_description = description;
        self
    }

    pub fn with_google_id(mut self, google_id: Option<String>) -> Self {
        self.google_id = google_id;
        self
    }

    pub fn with_google_description(mut self, description: Option<String>) -> Self {
        self.google_description = description;
        self
    }

    pub fn with_surface_forms(mut self, surface_forms: Vec<String>) -> Self {
        self.surface_forms = surface_forms;
        self
    }

    /// Sets the source of an entity, e.g. Google or Wikidata.
    ///
    /// Engines call this once, right before returning the entity. A second
    /// call overwrites the first.
    pub fn set_entity_source(&mut self, entity_source: impl Into<EntitySource>) {
        self.entity_source = Some(entity_source.into());
    }

    pub fn entity_source(&self) -> Option<&EntitySource> {
        self.entity_source.as_ref()
    }

    /// Canonical Wikidata page, if the entity has a QID
    pub fn wiki_url(&self) -> Option<String> {
        self.wiki_id
            .as_ref()
            .map(|id| format!("{WIKIDATA_GET_LINK}{id}"))
    }

    /// Google web search for the entity name
    pub fn google_search_url(&self) -> String {
        format!("{GOOGLE_LINK}{}", self.escaped_name())
    }

    /// Wikidata free-text search for the entity name
    pub fn wikidata_search_url(&self) -> String {
        format!("{WIKIDATA_SEARCH_LINK}{}", self.escaped_name())
    }

    fn escaped_name(&self) -> String {
        self.entity_name
            .as_deref()
            .unwrap_or_default()
            .replace(' ', "%20")
    }
}

fn or_none<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Entity(\"{}\", type: {}, qid: {}, googleId: {}, entitySource: {})",
            self.entity_name.as_deref().unwrap_or_default(),
            or_none(self.entity_type.as_deref()),
            or_none(self.wiki_id.as_deref()),
            or_none(self.google_id.as_deref()),
            or_none(self.entity_source.as_ref()),
        )?;
        writeln!(f, "surfaceForms: {:?}", self.surface_forms)?;
        writeln!(f, "googleDescription: {}", or_none(self.google_description.as_deref()))?;
        writeln!(
            f,
            "wikidataDescription: {}",
            or_none(self.wikidata_description.as_deref())
        )?;
        writeln!(f, "wikiUrl: {}", or_none(self.wiki_url()))?;
        write!(f, "googleUrl: {}", self.google_search_url())
    }
}
