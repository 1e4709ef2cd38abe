//! Client configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{GridCalError, GridCalResult};
use crate::state::ViewMode;

const STORE_URL_ENV: &str = "GRIDCAL_STORE_URL";
const API_KEY_ENV: &str = "GRIDCAL_API_KEY";

/// Configuration at ~/.config/gridcal/config.toml
///
/// The environment variables `GRIDCAL_STORE_URL` and `GRIDCAL_API_KEY`
/// override the file.
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// Base URL of the hosted event store, e.g. `https://data.example.com/rest/v1`
    #[serde(default)]
    pub store_url: String,

    /// API key sent as a bearer token on every request.
    #[serde(default)]
    pub api_key: String,

    /// View shown when no explicit view is requested.
    #[serde(default)]
    pub default_view: ViewMode,
}

impl Config {
    pub fn config_path() -> GridCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GridCalError::Config("Could not determine config directory".into()))?
            .join("gridcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from disk, then apply environment overrides. Fails if no store
    /// URL is configured anywhere.
    pub fn load() -> GridCalResult<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str::<Config>(&content).map_err(|e| GridCalError::Config(e.to_string()))?
        } else {
            Config {
                store_url: String::new(),
                api_key: String::new(),
                default_view: ViewMode::default(),
            }
        };

        if let Ok(url) = std::env::var(STORE_URL_ENV) {
            config.store_url = url;
        }
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.api_key = key;
        }

        if config.store_url.is_empty() {
            return Err(GridCalError::Config(format!(
                "No store URL configured. Set store_url in {} or export {}",
                path.display(),
                STORE_URL_ENV
            )));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            store_url = "https://data.example.com/rest/v1"
            api_key = "secret"
            default_view = "week"
            "#,
        )
        .unwrap();
        assert_eq!(config.store_url, "https://data.example.com/rest/v1");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.default_view, ViewMode::Week);
    }

    #[test]
    fn view_defaults_to_month() {
        let config: Config = toml::from_str(r#"store_url = "https://x.example""#).unwrap();
        assert_eq!(config.default_view, ViewMode::Month);
    }
}
