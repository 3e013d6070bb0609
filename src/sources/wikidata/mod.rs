//! Wikidata Entity Engine
//!
//! Searches and fetches items from the Wikidata API and normalizes them into
//! [`crate::Entity`]. Also hosts the Wikipedia title lookup that the Google
//! engine uses to find a result's QID.
//!
//! # Coverage
//!
//! - **Key type:** QID ("Q" followed by digits)
//! - **Search:** wbsearchentities, then one wbgetentities per hit
//! - **Batch:** claim extraction for up to 50 ids per request

mod batch;
mod client;
mod engine;
mod normalize;
mod resolver;
pub mod types;

pub use batch::{batch_wiki_ids, WIKI_ID_BATCH_SIZE};
pub use client::WikidataClient;
pub use engine::{WikiIdProperties, WikidataEntityEngine};
pub use normalize::{
    extract_property_from_entity_claims, google_id_candidates, process_result,
    GOOGLE_ID_PROPERTIES,
};
pub use resolver::{article_title, CrossReferenceResolver};
