//! Seed loading.
//!
//! The seed file is a JSON array of entries like
//! `{ "rawgSlug": "...", "developerName": "...", "province": "...",
//! "steamUrl": "...", "itchUrl": "...", "websiteUrl": "..." }`.

use std::path::PathBuf;

use serde_json::Value;

use crate::error::SeedError;
use crate::model::{ExternalLinks, SeedRecord};

/// The seed list compiled into the binary.
pub const BUNDLED_SEED: &str = include_str!("../data/games.seed.json");

/// Where the seed list is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeedSource {
    /// The file shipped with the crate.
    #[default]
    Bundled,
    /// A JSON file on disk, re-read on every load.
    File(PathBuf),
}

impl SeedSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::File(p),
            None => Self::Bundled,
        }
    }

    /// Read and validate the seed list.
    pub fn load(&self) -> Result<Vec<SeedRecord>, SeedError> {
        match self {
            Self::Bundled => load_seed(BUNDLED_SEED),
            Self::File(path) => {
                let content = std::fs::read_to_string(path)?;
                load_seed(&content)
            }
        }
    }
}

impl std::fmt::Display for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled seed"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse seed JSON text and validate every entry.
pub fn load_seed(json: &str) -> Result<Vec<SeedRecord>, SeedError> {
    let value: Value = serde_json::from_str(json)?;
    parse_seed(&value)
}

/// Validate an already-parsed seed document.
///
/// Fails on the first entry whose slug or developer name is blank after
/// trimming, naming its index.
pub fn parse_seed(value: &Value) -> Result<Vec<SeedRecord>, SeedError> {
    let items = value.as_array().ok_or(SeedError::NotAnArray)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let catalog_slug = coerce_text(item.get("rawgSlug"));
            let developer_name = coerce_text(item.get("developerName"));

            if catalog_slug.is_empty() {
                return Err(SeedError::MissingField {
                    index,
                    field: "rawgSlug",
                });
            }
            if developer_name.is_empty() {
                return Err(SeedError::MissingField {
                    index,
                    field: "developerName",
                });
            }

            Ok(SeedRecord {
                catalog_slug,
                developer_name,
                region: optional_text(item, "province"),
                links: ExternalLinks {
                    storefront_url: optional_text(item, "steamUrl"),
                    distribution_url: optional_text(item, "itchUrl"),
                    website_url: optional_text(item, "websiteUrl"),
                },
            })
        })
        .collect()
}

/// Render a required field as trimmed text. Numbers and booleans keep their
/// literal form; null, missing and structured values become empty.
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => number_text(n),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Integral floats render without a fractional part (`1.0` as `1`).
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

fn optional_text(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
#[path = "tests/seed_tests.rs"]
mod tests;
