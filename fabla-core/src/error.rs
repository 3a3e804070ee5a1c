/// Errors raised while loading the seed list.
///
/// Every variant is a deployment defect: the seed file ships with the site,
/// so a malformed entry fails the whole load instead of degrading.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seed JSON must be an array")]
    NotAnArray,

    #[error("Seed item #{index} missing {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("Seed JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error reading seed file: {0}")]
    Io(#[from] std::io::Error),
}
