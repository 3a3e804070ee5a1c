//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fabla")]
#[command(about = "Local game studios, enriched with RAWG catalog data", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for commands that talk to the catalog.
#[derive(Args, Clone, Debug)]
pub(crate) struct CatalogArgs {
    /// RAWG API key (overrides $RAWG_API_KEY and the config file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// RAWG API base URL (overrides $RAWG_BASE_URL and the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Seconds to keep successful catalog responses (0 disables the cache)
    #[arg(long, env = "FABLA_CACHE_TTL", default_value_t = 86_400)]
    pub cache_ttl: u64,
}

/// Arguments for commands that read the seed list.
#[derive(Args, Clone, Debug)]
pub(crate) struct SeedArgs {
    /// Seed JSON file (defaults to the bundled list)
    #[arg(long, env = "FABLA_SEED")]
    pub seed: Option<PathBuf>,

    /// Maximum concurrent catalog lookups (defaults to all at once)
    #[arg(long)]
    pub max_in_flight: Option<usize>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Serve the listing page and the catalog proxy endpoints
    Serve {
        /// Address to bind to
        #[arg(long, env = "FABLA_BIND", default_value = "127.0.0.1:3000")]
        bind: String,

        #[command(flatten)]
        seed: SeedArgs,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Enrich the seed list once and print the result
    Enrich {
        /// Print the enriched views as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Write a static HTML page to this path
        #[arg(long)]
        html: Option<PathBuf>,

        /// Write an enrichment log to this path
        #[arg(long)]
        log: Option<PathBuf>,

        #[command(flatten)]
        seed: SeedArgs,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Resolve one catalog slug and print the result as JSON
    Lookup {
        /// Catalog slug (e.g. stardew-valley)
        slug: String,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Search the catalog by name
    Search {
        /// Free-text query
        query: String,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Validate the seed list without contacting the catalog
    Seed {
        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Manage the RAWG API key configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the API key source and the catalog settings in effect
    Show,

    /// Save an API key to the config file
    SetKey {
        /// The RAWG API key
        key: String,
    },

    /// Print the config file path
    Path,
}
