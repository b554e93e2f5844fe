//! Build-time environment configuration
//!
//! Values are baked into the wasm bundle by `option_env!` and validated once
//! at startup; an invalid `API_URL` prevents the app from mounting.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("API_URL is not set")]
    MissingApiUrl,
    #[error("API_URL is not a valid URL ({value}): {reason}")]
    InvalidApiUrl { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: Url,
    pub enable_api_delay: bool,
    pub enable_api_error: bool,
    /// Only requests whose path contains this substring fail when set
    pub api_error_target: Option<String>,
}

impl AppConfig {
    /// Parse from a variable lookup. Booleans are true only for the literal "true".
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = get("API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        let api_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidApiUrl {
            value: raw_url.clone(),
            reason: e.to_string(),
        })?;
        if api_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                value: raw_url,
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let flag = |name: &str| get(name).map(|v| v == "true").unwrap_or(false);

        Ok(Self {
            api_url,
            enable_api_delay: flag("ENABLE_API_DELAY"),
            enable_api_error: flag("ENABLE_API_ERROR"),
            api_error_target: get("API_ERROR_TARGET")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    /// Values captured at compile time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| {
            let value = match name {
                "API_URL" => option_env!("API_URL"),
                "ENABLE_API_DELAY" => option_env!("ENABLE_API_DELAY"),
                "ENABLE_API_ERROR" => option_env!("ENABLE_API_ERROR"),
                "API_ERROR_TARGET" => option_env!("API_ERROR_TARGET"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Base URL without trailing slash, ready for `format!("{}{}", base, path)`
    pub fn base_url(&self) -> String {
        self.api_url.as_str().trim_end_matches('/').to_string()
    }
}
