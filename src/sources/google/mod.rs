//! Google Knowledge Graph Entity Engine
//!
//! Wraps the Knowledge Graph Search API (`entities:search`). Results are
//! normalized into [`crate::Entity`] and, when Google links a Wikipedia
//! article, backfilled with the matching Wikidata QID.
//!
//! # Coverage
//!
//! - **Key type:** knowledge-graph id ("/m/..." or "/g/...", optional "kg:" prefix)
//! - **Auth:** static API key
//! - **Search:** free text with optional schema.org type filter and limit

mod client;
mod engine;
mod normalize;
pub mod types;

pub use client::GoogleKgClient;
pub use engine::{GoogleEntityEngine, DEFAULT_SEARCH_LIMIT};
pub use normalize::{normalize_result, strip_kg_prefix, KG_PREFIX};
