use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fabla_scraper::{CredentialSource, Credentials, DEFAULT_BASE_URL};

use crate::error::CliError;

fn mask_value(s: &str) -> String {
    match s.char_indices().nth(2) {
        Some((i, _)) => format!("{}****", &s[..i]),
        None => "****".to_string(),
    }
}

/// Show the API key source and the catalog settings in effect.
pub(crate) fn run_config_show() {
    let path = fabla_scraper::config_path();
    let source = fabla_scraper::api_key_source();
    let creds = Credentials::load();

    log::info!(
        "{}",
        "RAWG Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    let source_str = format!("({})", source);
    match (&source, creds.api_key.as_deref()) {
        (CredentialSource::Missing, _) | (_, None) => {
            log::info!(
                "  {:<10} {} {}",
                "api_key",
                "-".if_supports_color(Stdout, |t| t.dimmed()),
                source_str.if_supports_color(Stdout, |t| t.red()),
            );
        }
        (_, Some(key)) => {
            log::info!(
                "  {:<10} {} {}",
                "api_key",
                mask_value(key),
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    let base_url = creds.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
    let base_note = if creds.base_url.is_some() {
        "(override)"
    } else {
        "(default)"
    };
    log::info!(
        "  {:<10} {} {}",
        "base_url",
        base_url,
        base_note.if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Save an API key to the config file.
pub(crate) fn run_config_set_key(key: &str) -> Result<(), CliError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::config("API key must not be empty"));
    }

    let path = fabla_scraper::save_api_key(key)?;
    log::info!(
        "{} Saved API key to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    if matches!(
        fabla_scraper::api_key_source(),
        CredentialSource::EnvVar(_)
    ) {
        log::warn!(
            "${} is set and takes precedence over the config file",
            fabla_scraper::API_KEY_ENV
        );
    }
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = fabla_scraper::config_path()
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;
    println!("{}", path.display());
    Ok(())
}
