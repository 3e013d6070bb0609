//! Normalization functions for Google Knowledge Graph data

use super::types::KgResult;
use crate::entity::{Entity, EntitySource};

/// Namespace prefix on knowledge-graph ids
pub const KG_PREFIX: &str = "kg:";

/// Strip a leading `kg:` namespace, if present
pub fn strip_kg_prefix(id: &str) -> &str {
    id.strip_prefix(KG_PREFIX).unwrap_or(id)
}

/// Normalize a knowledge-graph result to an Entity
///
/// `wiki_ids` are the QIDs resolved from the result's article URL (empty when
/// there is no URL or nothing resolved); several are joined with `|`.
pub fn normalize_result(result: &KgResult, wiki_ids: &[String]) -> Entity {
    let entity_type = result
        .types
        .as_deref()
        .map(|types| types.join("|"))
        .unwrap_or_default();

    let description = result
        .article_body()
        .filter(|body| !body.is_empty())
        .or(result.description.as_deref())
        .unwrap_or_default()
        .to_string();

    let wiki_id = Some(wiki_ids.join("|")).filter(|joined| !joined.is_empty());

    let mut entity = match result.name.as_deref() {
        Some(name) => Entity::new(name),
        None => Entity::unnamed(),
    }
    .with_entity_type(Some(entity_type))
    .with_wiki_id(wiki_id)
    .with_google_id(result.id.as_deref().map(|id| strip_kg_prefix(id).to_string()))
    .with_google_description(Some(description))
    .with_surface_forms(result.name.iter().cloned().collect());

    entity.set_entity_source(EntitySource::Google);
    entity
}
