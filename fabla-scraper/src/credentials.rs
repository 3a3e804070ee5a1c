use std::path::{Path, PathBuf};

use crate::error::ScrapeError;

pub const API_KEY_ENV: &str = "RAWG_API_KEY";
pub const BASE_URL_ENV: &str = "RAWG_BASE_URL";

/// Catalog access settings.
///
/// A missing key is not an error at load time: the client checks for it on
/// every call so the web endpoints can answer with a configuration error
/// while the page still renders degraded cards.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// Where the API key came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    rawg: Option<RawgConfig>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct RawgConfig {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl Credentials {
    /// Load from environment variables, falling back to the config file.
    pub fn load() -> Self {
        Self::load_from(config_path().as_deref())
    }

    /// Like [`Credentials::load`] with an explicit config file location.
    pub fn load_from(config: Option<&Path>) -> Self {
        let config = config.and_then(read_config_file);

        let api_key = non_empty_env(API_KEY_ENV)
            .or_else(|| config.as_ref().and_then(|c| c.api_key.clone()))
            .filter(|k| !k.trim().is_empty());

        let base_url = non_empty_env(BASE_URL_ENV)
            .or_else(|| config.as_ref().and_then(|c| c.base_url.clone()));

        Self { api_key, base_url }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Apply command-line overrides on top of loaded values.
    pub fn with_overrides(mut self, api_key: Option<String>, base_url: Option<String>) -> Self {
        if let Some(key) = api_key {
            self.api_key = Some(key);
        }
        if let Some(url) = base_url {
            self.base_url = Some(url);
        }
        self
    }

    /// The API key, or the configuration error callers must surface.
    pub fn require_api_key(&self) -> Result<&str, ScrapeError> {
        self.api_key.as_deref().ok_or(ScrapeError::MissingApiKey)
    }
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fabla").join("config.toml"))
}

/// Save the API key to the config file, keeping any base URL already there.
/// Returns the path the file was written to.
pub fn save_api_key(api_key: &str) -> Result<PathBuf, ScrapeError> {
    let path = config_path()
        .ok_or_else(|| ScrapeError::Config("Could not determine config directory".to_string()))?;
    save_api_key_to(&path, api_key)?;
    Ok(path)
}

/// Save the API key to a specific config file, creating parent directories as needed.
pub fn save_api_key_to(path: &Path, api_key: &str) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let base_url = read_config_file(path).and_then(|c| c.base_url);
    let config = ConfigFile {
        rawg: Some(RawgConfig {
            api_key: Some(api_key.to_string()),
            base_url,
        }),
    };

    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| ScrapeError::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Determine where the API key is coming from.
pub fn api_key_source() -> CredentialSource {
    if non_empty_env(API_KEY_ENV).is_some() {
        CredentialSource::EnvVar(API_KEY_ENV)
    } else if config_path()
        .as_deref()
        .and_then(read_config_file)
        .and_then(|c| c.api_key)
        .is_some()
    {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn read_config_file(path: &Path) -> Option<RawgConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.rawg
}

#[cfg(test)]
#[path = "tests/credentials_tests.rs"]
mod tests;
