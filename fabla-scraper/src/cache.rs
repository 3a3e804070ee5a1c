use std::collections::HashMap;

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

use crate::types::UpstreamResponse;

/// Upstream responses stay fresh for a day.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// In-memory cache of successful upstream responses, keyed by request URL
/// (without the API key).
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedResponse>>,
}

struct CachedResponse {
    stored_at: Instant,
    response: UpstreamResponse,
}

impl ResponseCache {
    /// A zero TTL disables caching.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh response for `key`, dropping it if it has expired.
    pub async fn get(&self, key: &str) -> Option<UpstreamResponse> {
        if !self.is_enabled() {
            return None;
        }
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.response.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a response. Only successful JSON responses are kept.
    ///
    /// Expired entries are swept on every insert, so keys that are never
    /// read again do not accumulate.
    pub async fn insert(&self, key: &str, response: &UpstreamResponse) {
        if !self.is_enabled() || response.success_json().is_none() {
            return;
        }
        let mut entries = self.entries.lock().await;
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        entries.insert(
            key.to_string(),
            CachedResponse {
                stored_at: Instant::now(),
                response: response.clone(),
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
