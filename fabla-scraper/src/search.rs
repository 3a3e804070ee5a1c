use crate::client::CatalogApi;
use crate::error::ScrapeError;
use crate::types::{SearchHit, parse_results};

/// Number of hits requested per search.
pub const SEARCH_PAGE_SIZE: u32 = 10;

/// Search the catalog by free text.
///
/// Unlike [`crate::resolve`], an upstream failure status is returned as
/// [`ScrapeError::Upstream`] so the caller can relay it. A successful status
/// with an unparseable body yields no hits.
pub async fn search<C: CatalogApi>(client: &C, query: &str) -> Result<Vec<SearchHit>, ScrapeError> {
    client.ensure_ready()?;

    let query = query.trim();
    if query.is_empty() {
        return Err(ScrapeError::InvalidQuery);
    }

    let response = client.search_games(query, SEARCH_PAGE_SIZE).await?;
    if !response.is_success() {
        return Err(ScrapeError::Upstream {
            status: response.status,
            details: response.details(),
        });
    }

    // A successful reply without a JSON body has no results.
    Ok(response
        .success_json()
        .map(parse_results::<SearchHit>)
        .unwrap_or_default())
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
