use fabla_core::{EnrichedGameView, SeedRecord};
use futures::stream::{self, StreamExt};

use crate::client::CatalogApi;
use crate::log::{EnrichLog, LogEntry};
use crate::resolve::{Resolution, resolve};

/// Options for an enrichment run.
#[derive(Debug, Clone, Default)]
pub struct EnrichOptions {
    /// Cap on concurrent catalog resolutions. `None` issues them all at once.
    pub max_in_flight: Option<usize>,
}

/// Views plus a per-entry account of how each was produced.
#[derive(Debug)]
pub struct EnrichResult {
    pub views: Vec<EnrichedGameView>,
    pub log: EnrichLog,
}

/// Enrich every seed entry with catalog data.
///
/// Returns exactly one view per seed entry, in seed order. Entries the
/// catalog cannot resolve, or whose lookup errors out, come back degraded
/// (slug as title, no images, no catalog details) rather than dropped.
pub async fn enrich<C: CatalogApi>(
    client: &C,
    seeds: &[SeedRecord],
    options: &EnrichOptions,
) -> Vec<EnrichedGameView> {
    enrich_with_log(client, seeds, options).await.views
}

/// [`enrich`], also returning the enrichment log.
pub async fn enrich_with_log<C: CatalogApi>(
    client: &C,
    seeds: &[SeedRecord],
    options: &EnrichOptions,
) -> EnrichResult {
    let in_flight = options.max_in_flight.unwrap_or(seeds.len()).max(1);

    // `buffered` keeps results in input order while running up to `in_flight` at once.
    // Each future owns its seed; borrowing from `seeds` makes the stream non-`Send`.
    let outcomes: Vec<(EnrichedGameView, LogEntry)> = stream::iter(seeds.iter().cloned())
        .map(|seed| async move { enrich_one(client, &seed).await })
        .buffered(in_flight)
        .collect()
        .await;

    let mut views = Vec::with_capacity(outcomes.len());
    let mut log = EnrichLog::new();
    for (view, entry) in outcomes {
        views.push(view);
        log.add(entry);
    }

    let summary = log.summary();
    log::debug!(
        "Enriched {} entries ({} found, {} not found, {} failed)",
        summary.total(),
        summary.found,
        summary.not_found,
        summary.failed,
    );

    EnrichResult { views, log }
}

async fn enrich_one<C: CatalogApi>(client: &C, seed: &SeedRecord) -> (EnrichedGameView, LogEntry) {
    let slug = &seed.catalog_slug;
    match resolve(client, slug).await {
        Ok(Resolution::Found {
            record,
            screenshots,
        }) => {
            let view = EnrichedGameView::merged(seed, &record, &screenshots);
            let redirected_to = (record.slug != *slug).then(|| record.slug.clone());
            let entry = LogEntry::Found {
                slug: slug.clone(),
                title: view.title.clone(),
                redirected_to,
                images: view.images.len(),
            };
            (view, entry)
        }
        Ok(Resolution::NotFound(nf)) => {
            log::debug!("'{}' not found in catalog: {}", slug, nf.message);
            let entry = LogEntry::NotFound {
                slug: slug.clone(),
                message: nf.message,
            };
            (EnrichedGameView::degraded(seed), entry)
        }
        Err(e) => {
            log::warn!("Catalog lookup for '{}' failed, showing it without data: {}", slug, e);
            let entry = LogEntry::Failed {
                slug: slug.clone(),
                message: e.to_string(),
            };
            (EnrichedGameView::degraded(seed), entry)
        }
    }
}

#[cfg(test)]
#[path = "tests/enrich_tests.rs"]
mod tests;
