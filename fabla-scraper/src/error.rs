/// Errors that can occur while talking to the game catalog.
///
/// Upstream data problems (404s, malformed bodies, broken redirects) are not
/// errors: `resolve` turns them into `Resolution::NotFound`. What remains
/// here is either configuration or transport.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing RAWG_API_KEY. Set the env var or run 'fabla config set-key'")]
    MissingApiKey,

    #[error("Missing q param")]
    InvalidQuery,

    #[error("RAWG search failed: {status}")]
    Upstream {
        status: u16,
        details: serde_json::Value,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScrapeError {
    /// True for errors caused by local configuration rather than the network.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::Config(_))
    }

    /// True when the request never produced an upstream response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Io(_))
    }
}
