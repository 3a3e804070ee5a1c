use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Seed list could not be read or validated
    #[error("Seed error: {0}")]
    Seed(#[from] fabla_core::SeedError),

    /// Catalog client error
    #[error("{0}")]
    Scrape(#[from] fabla_scraper::ScrapeError),

    /// Page rendering or export failed
    #[error("Render error: {0}")]
    Frontend(#[from] fabla_frontend::FrontendError),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
