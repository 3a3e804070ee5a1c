use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fabla_core::{EnrichedGameView, SeedSource};
use fabla_frontend::{HtmlPage, region_label};
use fabla_scraper::{EnrichOptions, LogEntry};

use crate::cli_types::{CatalogArgs, SeedArgs};
use crate::error::CliError;

pub(crate) struct EnrichOutput {
    pub json: bool,
    pub html: Option<PathBuf>,
    pub log: Option<PathBuf>,
}

/// Enrich the seed list once, then print and export the result.
pub(crate) fn run_enrich(
    seed: SeedArgs,
    catalog: &CatalogArgs,
    output: EnrichOutput,
    quiet: bool,
) -> Result<(), CliError> {
    let source = SeedSource::from_path(seed.seed);
    let seeds = source.load()?;
    let client = super::build_client(catalog)?;
    let options = EnrichOptions {
        max_in_flight: seed.max_in_flight,
    };

    let rt = super::runtime()?;
    let pb = crate::spinner::start(
        format!("Enriching {} entries from {}", seeds.len(), source),
        quiet || output.json,
    );
    let result = rt.block_on(fabla_scraper::enrich_with_log(&client, &seeds, &options));
    pb.finish_and_clear();

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result.views)?);
    } else {
        print_views(&result.views, result.log.entries());
    }

    if let Some(path) = &output.html {
        HtmlPage::default().write_to(&result.views, path)?;
        log::info!(
            "Wrote page to {}",
            path.display().if_supports_color(Stdout, |t| t.cyan())
        );
    }

    if let Some(path) = &output.log {
        result.log.write_to_file(path)?;
        log::info!(
            "Wrote log to {}",
            path.display().if_supports_color(Stdout, |t| t.cyan())
        );
    }

    let summary = result.log.summary();
    log::info!("");
    log::info!(
        "{} found ({} redirected), {} not found, {} failed, {} images",
        summary.found.if_supports_color(Stdout, |t| t.green()),
        summary.redirected,
        summary.not_found.if_supports_color(Stdout, |t| t.yellow()),
        summary.failed.if_supports_color(Stdout, |t| t.red()),
        summary.images,
    );

    Ok(())
}

fn print_views(views: &[EnrichedGameView], entries: &[LogEntry]) {
    for (view, entry) in views.iter().zip(entries) {
        let marker = match entry {
            LogEntry::Found { .. } => format!(
                "{}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green())
            ),
            LogEntry::NotFound { .. } => format!(
                "{}",
                "?".if_supports_color(Stdout, |t| t.yellow())
            ),
            LogEntry::Failed { .. } => format!(
                "{}",
                "\u{2718}".if_supports_color(Stdout, |t| t.bright_red())
            ),
        };

        log::info!(
            "  {} {} {}",
            marker,
            view.title.if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", view.seed).if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!(
            "      {} {} / {} / {} images",
            "by".if_supports_color(Stdout, |t| t.dimmed()),
            view.developer,
            region_label(view.region.as_deref()),
            view.images.len(),
        );
        match entry {
            LogEntry::Found {
                redirected_to: Some(target),
                ..
            } => log::info!("      redirected to {}", target),
            LogEntry::NotFound { message, .. } | LogEntry::Failed { message, .. } => {
                log::info!(
                    "      {}",
                    message.if_supports_color(Stdout, |t| t.dimmed())
                )
            }
            _ => {}
        }
    }
}

/// Validate the seed list and print its entries.
pub(crate) fn run_seed_check(seed: SeedArgs) -> Result<(), CliError> {
    let source = SeedSource::from_path(seed.seed);
    let seeds = source.load()?;

    log::info!(
        "{} {} entries in {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        seeds.len(),
        source.if_supports_color(Stdout, |t| t.cyan()),
    );
    for record in &seeds {
        log::info!(
            "  {:<28} {} ({})",
            record.catalog_slug,
            record.developer_name,
            region_label(record.region.as_deref()),
        );
    }
    Ok(())
}
