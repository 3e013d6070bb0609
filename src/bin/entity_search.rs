//! Entity Search CLI
//!
//! Query Google Knowledge Graph and Wikidata from the command line and print
//! the normalized entities as JSON.
//!
//! Usage:
//!   cargo run --features cli --bin entity-search -- google search "Arsenal" --type SportsTeam --limit 5
//!   cargo run --features cli --bin entity-search -- google get kg:/m/0xbm
//!   cargo run --features cli --bin entity-search -- wikidata search "Arsenal FC"
//!   cargo run --features cli --bin entity-search -- wikidata get Q9617
//!   cargo run --features cli --bin entity-search -- wikidata properties Q9617 Q18656 --property P571 --property P646
//!
//! The Google commands need GOOGLE_SEARCH_API_KEY (a .env file is honoured).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use entity_search_engines::{
    EngineConfig, EntityEngine, GoogleEntityEngine, SearchOptions, WikidataEntityEngine,
};

/// Ground entity mentions against Google Knowledge Graph and Wikidata
#[derive(Parser, Debug)]
#[command(name = "entity-search")]
struct Args {
    /// Transport timeout in seconds
    #[arg(long, env = "ENTITY_SEARCH_TIMEOUT_SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    source: Source,
}

#[derive(Subcommand, Debug)]
enum Source {
    /// Google Knowledge Graph
    Google {
        #[command(subcommand)]
        command: GoogleCommand,
    },
    /// Wikidata
    Wikidata {
        #[command(subcommand)]
        command: WikidataCommand,
    },
}

#[derive(Subcommand, Debug)]
enum GoogleCommand {
    /// Free-text search
    Search {
        query: String,
        /// schema.org type filter (repeatable)
        #[arg(long = "type")]
        types: Vec<String>,
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },
    /// Look up a knowledge-graph id
    Get { id: String },
}

#[derive(Subcommand, Debug)]
enum WikidataCommand {
    /// Free-text search
    Search {
        query: String,
        /// Fetch all hits in one batched request
        #[arg(long)]
        batched: bool,
    },
    /// Look up a QID
    Get { id: String },
    /// Claim values for several QIDs
    Properties {
        ids: Vec<String>,
        /// Property id to extract (repeatable)
        #[arg(long = "property", required = true)]
        properties: Vec<String>,
        #[arg(long, default_value = "en")]
        languages: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = EngineConfig::from_env().context("Failed to load configuration")?;
    if let Some(secs) = args.timeout {
        config = config.with_timeout(std::time::Duration::from_secs(secs));
    }

    match args.source {
        Source::Google { command } => {
            let engine =
                GoogleEntityEngine::new(&config).context("Failed to create Google engine")?;
            match command {
                GoogleCommand::Search {
                    query,
                    types,
                    limit,
                } => {
                    let mut options = SearchOptions::new().with_limit(limit);
                    if !types.is_empty() {
                        options = options.with_types(types);
                    }
                    let entities = engine
                        .search_for_entity(&query, Some(options))
                        .await
                        .with_context(|| format!("Google search for {query:?} failed"))?;
                    print_json(&entities)
                }
                GoogleCommand::Get { id } => {
                    let entity = engine
                        .get_entity(&id)
                        .await
                        .with_context(|| format!("Google lookup of {id} failed"))?;
                    print_json(&entity)
                }
            }
        }
        Source::Wikidata { command } => {
            let engine =
                WikidataEntityEngine::new(&config).context("Failed to create Wikidata engine")?;
            match command {
                WikidataCommand::Search { query, batched } => {
                    let entities = if batched {
                        engine.search_for_entity_batched(&query).await
                    } else {
                        engine.search_for_entity(&query, None).await
                    }
                    .with_context(|| format!("Wikidata search for {query:?} failed"))?;
                    print_json(&entities)
                }
                WikidataCommand::Get { id } => {
                    let entity = engine
                        .get_entity(&id)
                        .await
                        .with_context(|| format!("Wikidata lookup of {id} failed"))?;
                    print_json(&entity)
                }
                WikidataCommand::Properties {
                    ids,
                    properties,
                    languages,
                } => {
                    let values = engine
                        .get_properties_of_wiki_ids(&ids, &properties, &languages)
                        .await
                        .context("Wikidata property lookup failed")?;
                    print_json(&values)
                }
            }
        }
    }
}
