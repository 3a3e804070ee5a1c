pub(crate) mod config;
pub(crate) mod enrich;
pub(crate) mod lookup;
pub(crate) mod serve;

use std::time::Duration;

use fabla_scraper::{Credentials, RawgClient, ResponseCache};

use crate::cli_types::CatalogArgs;
use crate::error::CliError;

/// Build a catalog client from loaded credentials plus command-line overrides.
pub(crate) fn build_client(args: &CatalogArgs) -> Result<RawgClient, CliError> {
    let creds = Credentials::load().with_overrides(args.api_key.clone(), args.base_url.clone());
    if creds.api_key.is_none() {
        log::warn!("No RAWG API key configured; catalog lookups will fail");
    }

    let cache = if args.cache_ttl == 0 {
        ResponseCache::disabled()
    } else {
        ResponseCache::new(Duration::from_secs(args.cache_ttl))
    };

    Ok(RawgClient::new(creds)?.with_cache(cache))
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}
