use fabla_core::{CatalogRecord, NOT_FOUND_NAME, Screenshot, UNDEFINED_SLUG};
use serde_json::{Value, json};

use crate::client::CatalogApi;
use crate::error::ScrapeError;
use crate::types::{RawgGame, UpstreamResponse, screenshots_from_response};

/// Outcome of resolving a slug against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The catalog knows the game; screenshots may be empty.
    Found {
        record: CatalogRecord,
        screenshots: Vec<Screenshot>,
    },
    /// Nothing usable came back. Carries the placeholder record and why.
    NotFound(NotFound),
}

/// Diagnostics for a slug the catalog could not resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct NotFound {
    pub sentinel: CatalogRecord,
    pub message: String,
    pub details: Value,
}

impl Resolution {
    fn not_found(requested: &str, message: impl Into<String>, details: Value) -> Self {
        Self::NotFound(NotFound {
            sentinel: CatalogRecord::not_found(requested),
            message: message.into(),
            details,
        })
    }

    pub fn record(&self) -> &CatalogRecord {
        match self {
            Self::Found { record, .. } => record,
            Self::NotFound(nf) => &nf.sentinel,
        }
    }

    pub fn screenshots(&self) -> &[Screenshot] {
        match self {
            Self::Found { screenshots, .. } => screenshots,
            Self::NotFound(_) => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Resolve a slug to its catalog record and screenshots.
///
/// 1. Look up the slug. A failed status or a body that is not a JSON object
///    yields `NotFound`.
/// 2. If the catalog answers with a redirect, the target slug must be
///    non-empty and not `"undefined"`. A different target is looked up once;
///    if that lookup fails the original record is kept.
/// 3. A record named `"UNDEFINED"` or with slug `"undefined"` is `NotFound`.
/// 4. Screenshots for the final slug are best-effort: any failure yields none.
///
/// Only configuration and transport errors on the first lookup are returned
/// as `Err`.
pub async fn resolve<C: CatalogApi>(client: &C, slug: &str) -> Result<Resolution, ScrapeError> {
    client.ensure_ready()?;

    let response = client.fetch_game(slug).await?;
    let Some(mut game) = RawgGame::from_response(&response) else {
        return Ok(Resolution::not_found(
            slug,
            failure_message(&response),
            response.details(),
        ));
    };

    if game.redirect {
        let target = game.slug.trim().to_string();
        if target.is_empty() || target == UNDEFINED_SLUG {
            return Ok(Resolution::not_found(
                slug,
                "RAWG redirect target invalid",
                json!({ "requested": slug, "game": game.raw }),
            ));
        }

        if target != slug {
            log::debug!("'{}' redirects to '{}'", slug, target);
            match client.fetch_game(&target).await {
                Ok(redirected) => match RawgGame::from_response(&redirected) {
                    Some(g) => game = g,
                    None => log::debug!(
                        "Redirect target '{}' failed ({}), keeping '{}'",
                        target,
                        redirected.status,
                        slug
                    ),
                },
                Err(e) => log::debug!(
                    "Redirect target '{}' failed ({}), keeping '{}'",
                    target,
                    e,
                    slug
                ),
            }
        }
    }

    if game.name == NOT_FOUND_NAME || game.slug == UNDEFINED_SLUG {
        return Ok(Resolution::not_found(
            slug,
            "Invalid RAWG game returned",
            json!({ "requested": slug, "game": game.raw }),
        ));
    }

    let final_slug = game.slug_or(slug).to_string();
    let screenshots = match client.fetch_screenshots(&final_slug).await {
        Ok(resp) => screenshots_from_response(&resp),
        Err(e) => {
            log::debug!("Screenshots for '{}' unavailable: {}", final_slug, e);
            Vec::new()
        }
    };

    Ok(Resolution::Found {
        record: game.into_record(slug),
        screenshots,
    })
}

fn failure_message(response: &UpstreamResponse) -> String {
    if response.is_success() {
        "RAWG game response was not a JSON object".to_string()
    } else {
        format!("RAWG game fetch failed: {}", response.status)
    }
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
