//! fabla CLI
//!
//! Serves the local game listing and exposes the catalog pipeline from the
//! command line.

mod cli_types;
mod commands;
mod error;
mod logging;
mod server;
mod spinner;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, ConfigAction};
use commands::enrich::EnrichOutput;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.bright_red()),
            e
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let quiet = cli.quiet;

    match cli.command {
        Commands::Serve {
            bind,
            seed,
            catalog,
        } => commands::serve::run_serve(&bind, seed, &catalog),
        Commands::Enrich {
            json,
            html,
            log,
            seed,
            catalog,
        } => commands::enrich::run_enrich(seed, &catalog, EnrichOutput { json, html, log }, quiet),
        Commands::Lookup { slug, catalog } => commands::lookup::run_lookup(&slug, &catalog, quiet),
        Commands::Search { query, catalog } => {
            commands::lookup::run_search(&query, &catalog, quiet)
        }
        Commands::Seed { seed } => commands::enrich::run_seed_check(seed),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::SetKey { key } => commands::config::run_config_set_key(&key),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}
