use std::sync::Arc;

use fabla_core::SeedSource;
use fabla_frontend::HtmlPage;
use fabla_scraper::EnrichOptions;

use crate::cli_types::{CatalogArgs, SeedArgs};
use crate::error::CliError;
use crate::server::{AppState, router};

/// Run the HTTP server until ctrl-c.
pub(crate) fn run_serve(bind: &str, seed: SeedArgs, catalog: &CatalogArgs) -> Result<(), CliError> {
    let source = SeedSource::from_path(seed.seed);
    // Fail at startup rather than on the first page view.
    let seeds = source.load()?;
    log::debug!("{} seed entries from {}", seeds.len(), source);

    let state = Arc::new(AppState {
        client: super::build_client(catalog)?,
        seed: source,
        page: HtmlPage::default(),
        enrich: EnrichOptions {
            max_in_flight: seed.max_in_flight,
        },
    });

    let rt = super::runtime()?;
    rt.block_on(crate::server::serve(bind, router(state)))
        .map_err(|e| CliError::runtime(format!("Server on {} failed: {}", bind, e)))
}
