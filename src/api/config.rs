//! Colors API configuration.

use crate::error::ErrorCode;

pub const DEFAULT_COLOR_API_BASE_URL: &str =
    "https://behr-color-worker-production.behr-enterprise-account.workers.dev/api";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("colors API base URL is empty")]
    EmptyBaseUrl,

    #[error("colors API base URL must be http(s): {0}")]
    InvalidBaseUrl(String),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBaseUrl => "E_CONFIG_EMPTY_BASE_URL",
            Self::InvalidBaseUrl(_) => "E_CONFIG_INVALID_BASE_URL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorApiConfig {
    pub base_url: String,
}

impl ColorApiConfig {
    /// Build config from a base URL such as `https://host/api`. A trailing
    /// `/` is dropped so `colors_url` never doubles it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is blank or not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { base_url: base_url.to_owned() })
    }

    /// `GET` endpoint returning the full color list.
    #[must_use]
    pub fn colors_url(&self) -> String {
        format!("{}/colors", self.base_url)
    }
}

impl Default for ColorApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_COLOR_API_BASE_URL.to_owned() }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
