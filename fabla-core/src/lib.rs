//! Core data model for the fabla game listing.
//!
//! Holds the seed entries curated for the site, the catalog records they
//! resolve to, and the merged views handed to the renderer.

pub mod error;
pub mod model;
pub mod seed;

pub use error::SeedError;
pub use model::{
    CatalogDetails, CatalogRecord, EnrichedGameView, ExternalLinks, NOT_FOUND_NAME, Screenshot,
    SeedRecord, UNDEFINED_SLUG,
};
pub use seed::{BUNDLED_SEED, SeedSource, load_seed, parse_seed};
