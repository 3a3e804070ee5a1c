//! Client for the RAWG game catalog and the enrichment pipeline built on it.

pub mod cache;
pub mod client;
pub mod credentials;
pub mod enrich;
pub mod error;
pub mod log;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod resolve;
pub mod search;
pub mod types;

pub use cache::{DEFAULT_CACHE_TTL, ResponseCache};
pub use client::{CatalogApi, DEFAULT_BASE_URL, RawgClient};
pub use credentials::{
    API_KEY_ENV, BASE_URL_ENV, CredentialSource, Credentials, api_key_source, config_path,
    save_api_key,
};
pub use enrich::{EnrichOptions, EnrichResult, enrich, enrich_with_log};
pub use error::ScrapeError;
pub use log::{EnrichLog, LogEntry, LogSummary};
pub use resolve::{NotFound, Resolution, resolve};
pub use search::{SEARCH_PAGE_SIZE, search};
pub use types::{SearchHit, UpstreamBody, UpstreamResponse};
