use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fabla_scraper::Resolution;

use crate::cli_types::CatalogArgs;
use crate::error::CliError;

/// Resolve one slug and print the record, screenshots and any diagnostics as JSON.
pub(crate) fn run_lookup(slug: &str, catalog: &CatalogArgs, quiet: bool) -> Result<(), CliError> {
    let client = super::build_client(catalog)?;
    let rt = super::runtime()?;

    let pb = crate::spinner::start(format!("Looking up {}", slug), quiet);
    let resolution = rt.block_on(fabla_scraper::resolve(&client, slug));
    pb.finish_and_clear();

    let body = match resolution? {
        Resolution::Found {
            record,
            screenshots,
        } => {
            if record.slug != slug {
                log::warn!(
                    "'{}' redirected to '{}'",
                    slug,
                    record.slug.if_supports_color(Stdout, |t| t.cyan())
                );
            }
            serde_json::json!({ "game": record, "screenshots": screenshots })
        }
        Resolution::NotFound(nf) => {
            log::warn!("{}", nf.message);
            serde_json::json!({
                "game": nf.sentinel,
                "screenshots": [],
                "error": { "message": nf.message, "details": nf.details },
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

/// Search the catalog and print one hit per line.
pub(crate) fn run_search(query: &str, catalog: &CatalogArgs, quiet: bool) -> Result<(), CliError> {
    let client = super::build_client(catalog)?;
    let rt = super::runtime()?;

    let pb = crate::spinner::start(format!("Searching for \"{}\"", query), quiet);
    let hits = rt.block_on(fabla_scraper::search(&client, query));
    pb.finish_and_clear();
    let hits = hits?;

    if hits.is_empty() {
        log::info!("{}", "No results".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    for hit in &hits {
        log::info!(
            "  {:<40} {} {}",
            hit.name.if_supports_color(Stdout, |t| t.bold()),
            hit.slug.if_supports_color(Stdout, |t| t.cyan()),
            hit.released
                .as_deref()
                .unwrap_or("")
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
