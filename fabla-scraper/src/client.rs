use std::future::Future;

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tokio::time::Duration;

use crate::cache::ResponseCache;
use crate::credentials::Credentials;
use crate::error::ScrapeError;
use crate::types::UpstreamResponse;

pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";
const USER_AGENT: &str = "FablaGames/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw access to the game catalog.
///
/// Implementations report what the upstream said (status and body) and only
/// fail for configuration or transport problems. Interpreting the body is
/// left to [`crate::resolve`] and [`crate::search`].
pub trait CatalogApi: Send + Sync {
    /// Fail with [`ScrapeError::MissingApiKey`] if no request can be made.
    fn ensure_ready(&self) -> Result<(), ScrapeError>;

    /// `GET /games/{slug}`
    fn fetch_game(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<UpstreamResponse, ScrapeError>> + Send;

    /// `GET /games/{slug}/screenshots`
    fn fetch_screenshots(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<UpstreamResponse, ScrapeError>> + Send;

    /// `GET /games?search={query}&page_size={page_size}`
    fn search_games(
        &self,
        query: &str,
        page_size: u32,
    ) -> impl Future<Output = Result<UpstreamResponse, ScrapeError>> + Send;
}

/// HTTP client for the RAWG API with an optional response cache.
pub struct RawgClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    cache: ResponseCache,
}

impl RawgClient {
    /// Build a client. A missing API key is accepted here and reported on each call.
    pub fn new(creds: Credentials) -> Result<Self, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        let base = creds.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(base)
            .map_err(|e| ScrapeError::Config(format!("Invalid base URL '{}': {}", base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ScrapeError::Config(format!(
                "Base URL '{}' cannot carry a path",
                base
            )));
        }

        Ok(Self {
            http,
            base_url,
            api_key: creds.api_key,
            cache: ResponseCache::default(),
        })
    }

    /// Replace the response cache (e.g. with [`ResponseCache::disabled`]).
    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Build `{base}/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json(&self, url: Url) -> Result<UpstreamResponse, ScrapeError> {
        let key = self.api_key.as_deref().ok_or(ScrapeError::MissingApiKey)?;
        let cache_key = url.to_string();

        if let Some(hit) = self.cache.get(&cache_key).await {
            log::debug!("Cache hit for {}", cache_key);
            return Ok(hit);
        }

        let mut request_url = url;
        request_url.query_pairs_mut().append_pair("key", key);

        log::debug!("GET {}", cache_key);
        let resp = self.http.get(request_url).send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        let response = UpstreamResponse::from_text(status, &text);

        if response.is_success() {
            self.cache.insert(&cache_key, &response).await;
        } else {
            log::debug!("{} returned HTTP {}", cache_key, status);
        }
        Ok(response)
    }
}

impl CatalogApi for RawgClient {
    fn ensure_ready(&self) -> Result<(), ScrapeError> {
        self.api_key
            .as_deref()
            .map(|_| ())
            .ok_or(ScrapeError::MissingApiKey)
    }

    async fn fetch_game(&self, slug: &str) -> Result<UpstreamResponse, ScrapeError> {
        self.get_json(self.endpoint(&["games", slug])).await
    }

    async fn fetch_screenshots(&self, slug: &str) -> Result<UpstreamResponse, ScrapeError> {
        self.get_json(self.endpoint(&["games", slug, "screenshots"]))
            .await
    }

    async fn search_games(
        &self,
        query: &str,
        page_size: u32,
    ) -> Result<UpstreamResponse, ScrapeError> {
        let mut url = self.endpoint(&["games"]);
        url.query_pairs_mut()
            .append_pair("search", query)
            .append_pair("page_size", &page_size.to_string());
        self.get_json(url).await
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
