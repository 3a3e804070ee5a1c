//! In-memory [`CatalogApi`] for tests.
//!
//! Unknown slugs answer with the catalog's 404 body. Every request is
//! recorded so tests can assert on call order and redirects.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{Value, json};

use crate::client::CatalogApi;
use crate::error::ScrapeError;
use crate::types::UpstreamResponse;

#[derive(Debug, Clone)]
enum Reply {
    Response(UpstreamResponse),
    TransportError,
}

#[derive(Debug, Default)]
pub struct MockCatalog {
    missing_key: bool,
    games: HashMap<String, Reply>,
    screenshots: HashMap<String, Reply>,
    search: Option<Reply>,
    calls: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behave as if no API key were configured.
    pub fn without_api_key(mut self) -> Self {
        self.missing_key = true;
        self
    }

    /// `GET /games/{slug}` answers 200 with `body`.
    pub fn game(self, slug: &str, body: Value) -> Self {
        self.game_response(slug, UpstreamResponse::json(200, body))
    }

    pub fn game_response(mut self, slug: &str, response: UpstreamResponse) -> Self {
        self.games.insert(slug.to_string(), Reply::Response(response));
        self
    }

    /// `GET /games/{slug}` fails before any response arrives.
    pub fn game_transport_error(mut self, slug: &str) -> Self {
        self.games.insert(slug.to_string(), Reply::TransportError);
        self
    }

    /// `GET /games/{slug}/screenshots` answers 200 with these image URLs.
    pub fn screenshots(self, slug: &str, images: &[&str]) -> Self {
        let results: Vec<Value> = images
            .iter()
            .enumerate()
            .map(|(i, image)| json!({ "id": i + 1, "image": image, "width": 1280, "height": 720 }))
            .collect();
        self.screenshots_response(
            slug,
            UpstreamResponse::json(200, json!({ "count": results.len(), "results": results })),
        )
    }

    pub fn screenshots_response(mut self, slug: &str, response: UpstreamResponse) -> Self {
        self.screenshots
            .insert(slug.to_string(), Reply::Response(response));
        self
    }

    pub fn screenshots_transport_error(mut self, slug: &str) -> Self {
        self.screenshots
            .insert(slug.to_string(), Reply::TransportError);
        self
    }

    pub fn search_response(mut self, response: UpstreamResponse) -> Self {
        self.search = Some(Reply::Response(response));
        self
    }

    /// Requests made so far, as `game:{slug}`, `screenshots:{slug}` or `search:{query}`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn reply(&self, reply: Option<&Reply>) -> Result<UpstreamResponse, ScrapeError> {
        self.ensure_ready()?;
        match reply {
            Some(Reply::Response(r)) => Ok(r.clone()),
            Some(Reply::TransportError) => Err(ScrapeError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "mock transport failure",
            ))),
            None => Ok(UpstreamResponse::json(404, json!({ "detail": "Not found." }))),
        }
    }
}

impl CatalogApi for MockCatalog {
    fn ensure_ready(&self) -> Result<(), ScrapeError> {
        if self.missing_key {
            Err(ScrapeError::MissingApiKey)
        } else {
            Ok(())
        }
    }

    async fn fetch_game(&self, slug: &str) -> Result<UpstreamResponse, ScrapeError> {
        self.record(format!("game:{}", slug));
        self.reply(self.games.get(slug))
    }

    async fn fetch_screenshots(&self, slug: &str) -> Result<UpstreamResponse, ScrapeError> {
        self.record(format!("screenshots:{}", slug));
        self.reply(self.screenshots.get(slug))
    }

    async fn search_games(
        &self,
        query: &str,
        _page_size: u32,
    ) -> Result<UpstreamResponse, ScrapeError> {
        self.record(format!("search:{}", query));
        self.reply(self.search.as_ref())
    }
}
