//! Entity engines for the external knowledge bases
//!
//! Each engine implements [`EntityEngine`]: free-text search plus id lookup,
//! normalized to [`crate::Entity`].

pub mod google;
pub mod traits;
pub mod wikidata;

pub use google::GoogleEntityEngine;
pub use traits::{EntityEngine, FetchOptions, SearchOptions, DEFAULT_WIKIDATA_PROPS};
pub use wikidata::{CrossReferenceResolver, WikidataEntityEngine};
