//! Entity search engines for Google Knowledge Graph and Wikidata
//!
//! Grounds free-text entity mentions against both knowledge bases and
//! cross-links the results: Google hits are enriched with their Wikidata QID,
//! Wikidata items with their (unambiguous) Google id.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use entity_search_engines::{EngineConfig, EntityEngine, GoogleEntityEngine, WikidataEntityEngine};
//!
//! # async fn run() -> entity_search_engines::Result<()> {
//! let config = EngineConfig::from_env()?;
//!
//! let wikidata = WikidataEntityEngine::new(&config)?;
//! let arsenal = wikidata.get_entity("Q9617").await?;
//! println!("{arsenal}");
//!
//! let google = GoogleEntityEngine::new(&config)?;
//! for entity in google.search_for_entity("Arsenal", None).await? {
//!     println!("{:?} -> {:?}", entity.google_id, entity.wiki_id);
//! }
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

pub mod config;
pub mod entity;

// Provider access
pub mod sources;
pub mod transport;

pub use config::EngineConfig;
pub use entity::{Entity, EntitySource};
pub use error::{Error, Result};
pub use sources::{
    CrossReferenceResolver, EntityEngine, FetchOptions, GoogleEntityEngine, SearchOptions,
    WikidataEntityEngine,
};
pub use transport::{HttpTransport, JsonTransport};
#[cfg(any(test, feature = "test-util"))]
pub use transport::StubTransport;
