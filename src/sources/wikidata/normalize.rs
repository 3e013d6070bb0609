//! Normalization functions for Wikidata data
//!
//! Converts wbgetentities records to [`Entity`] and pulls claim values out of
//! raw claim maps.

use std::collections::HashMap;

use serde_json::Value;

use super::types::{Claim, WikidataEntity};
use crate::entity::{Entity, EntitySource};

/// Google Knowledge Graph ID (P2671) and Freebase ID (P646)
pub const GOOGLE_ID_PROPERTIES: &[&str] = &["P2671", "P646"];

const LANGUAGE: &str = "en";

/// Normalize a Wikidata entity record to an Entity
///
/// The record's own `id` is used (not the requested one) so redirects resolve
/// to the target item. A Google id is only set when exactly one candidate is
/// found across [`GOOGLE_ID_PROPERTIES`].
pub fn process_result(record: &WikidataEntity) -> Entity {
    let google_ids = google_id_candidates(&record.claims);

    let mut entity = match record.label(LANGUAGE) {
        Some(label) => Entity::new(label),
        None => Entity::unnamed(),
    }
    .with_surface_forms(record.aliases(LANGUAGE))
    .with_wiki_id(Some(record.id.clone()))
    .with_wikidata_description(record.description(LANGUAGE).map(str::to_string))
    .with_google_id(single(google_ids));

    entity.set_entity_source(EntitySource::Wikidata);
    entity
}

/// Every string value under the Google id properties, in property order
pub fn google_id_candidates(claims: &HashMap<String, Vec<Claim>>) -> Vec<String> {
    GOOGLE_ID_PROPERTIES
        .iter()
        .flat_map(|property_id| claims.get(*property_id).into_iter().flatten())
        .filter_map(|claim| claim.main_value())
        .filter_map(|value| value.as_str().map(str::to_string))
        .collect()
}

fn single(mut values: Vec<String>) -> Option<String> {
    if values.len() == 1 {
        values.pop()
    } else {
        None
    }
}

/// Extract `mainsnak.datavalue.value` for each requested property
///
/// Properties with no claims are left out. A claim without a main value
/// records `None` and logs a warning; when a property has several claims the
/// last one read wins.
pub fn extract_property_from_entity_claims(
    wiki_id: &str,
    entity_claims: &HashMap<String, Vec<Claim>>,
    property_ids: &[String],
) -> HashMap<String, Option<Value>> {
    let mut properties = HashMap::new();

    for property_id in property_ids {
        for claim in entity_claims.get(property_id).into_iter().flatten() {
            let value = claim.main_value().cloned();
            if value.is_none() {
                tracing::warn!(
                    wiki_id = %wiki_id,
                    property = %property_id,
                    "Couldn't find property {} for {}",
                    property_id,
                    wiki_id
                );
            }
            properties.insert(property_id.clone(), value);
        }
    }

    properties
}
