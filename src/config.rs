//! Environment-driven settings for emojiterm.
//!
//! There is no configuration file. Settings come from the environment, after
//! loading a `.env` file from the working directory (existing variables win).

use crate::catalog::{DEFAULT_CATALOG_URL, GITHUB_TOKEN_ENV};

/// Environment variable overriding the catalog endpoint.
pub const CATALOG_URL_ENV: &str = "EMOJITERM_API_URL";

/// Settings gathered from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Bearer credential for the catalog endpoint.
    pub token: Option<String>,
    /// Catalog endpoint.
    pub catalog_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            token: None,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}

/// Load a `.env` file from the working directory, if there is one.
///
/// Does not override variables that are already set.
pub fn load_env() -> Option<std::path::PathBuf> {
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    dotenv::dotenv().ok()
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(GITHUB_TOKEN_ENV).filter(|t| !t.trim().is_empty());
        let catalog_url = match lookup(CATALOG_URL_ENV).filter(|u| !u.trim().is_empty()) {
            Some(url) => {
                let url = url.trim().to_string();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidUrl {
                        var: CATALOG_URL_ENV,
                        value: url,
                    });
                }
                url
            }
            None => DEFAULT_CATALOG_URL.to_string(),
        };

        Ok(Self { token, catalog_url })
    }
}

/// Errors that can occur when reading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}
