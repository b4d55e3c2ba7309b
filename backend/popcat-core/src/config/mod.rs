use crate::error::config::ConfigError;
use crate::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const BASE_URL_ENV: &str = "POPCAT_BASE_URL";
pub const TIMEOUT_ENV: &str = "POPCAT_TIMEOUT_SECS";
pub const API_KEY_ENV: &str = "POPCAT_API_KEY";

// ============================================
// CONFIG STRUCT
// ============================================

/// Settings for building a [`PopcatClient`](crate::PopcatClient).
///
/// `timeout_secs` stays `None` unless set, which leaves the transport's own
/// timeout behaviour in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ClientConfig {
    /// Load config from a TOML file.
    ///
    /// # Returns
    ///
    /// Returns defaults if the file does not exist.
    /// Returns `Err(ConfigError)` if the file exists but is unreadable or invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read config file {}: {}", path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config: ClientConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML {}: {}", path.display(), e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Override fields from `POPCAT_BASE_URL` and `POPCAT_TIMEOUT_SECS`.
    ///
    /// Unset or empty variables leave the field untouched.
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(base_url) = read_env(BASE_URL_ENV) {
            self.base_url = base_url;
        }

        if let Some(raw) = read_env(TIMEOUT_ENV) {
            let timeout_secs = raw.parse::<u64>().map_err(|e| ConfigError::EnvError {
                location: ErrorLocation::from(Location::caller()),
                variable: TIMEOUT_ENV,
                reason: format!("'{}' is not a whole number of seconds: {}", raw, e),
            })?;
            self.timeout_secs = Some(timeout_secs);
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "base_url cannot be empty".to_string(),
            });
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid base_url format: {}", self.base_url),
            });
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("base_url is not a valid URL: {}", self.base_url),
            });
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "timeout_secs must be greater than zero".to_string(),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "user_agent cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Paste-service credential from `POPCAT_API_KEY`, if set and non-empty.
pub fn api_key_from_env() -> Option<String> {
    read_env(API_KEY_ENV)
}

fn read_env(variable: &str) -> Option<String> {
    std::env::var(variable)
        .ok()
        .filter(|value| !value.is_empty())
}
