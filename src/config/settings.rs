//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `EVENTHUB_API__BASE_URL`
pub const ENV_PREFIX: &str = "EVENTHUB";

/// Main client configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub listing: ListingConfig,
    pub logging: LoggingConfig,
}

/// Events REST API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Where the auth session is persisted
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub token_path: String,
}

/// Event list behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Category name that means "no filter"
    pub all_category_label: String,
    pub upcoming_only: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit file plus environment variables
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::load(config::File::from(path.as_ref()).required(true))
    }

    fn load<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::EventHubError> {
        super::validation::validate_settings(self)
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.api.timeout_seconds)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3000/api".to_string(),
                timeout_seconds: 15,
                user_agent: format!("EventHub-Client/{}", env!("CARGO_PKG_VERSION")),
            },
            session: SessionConfig {
                token_path: default_token_path(),
            },
            listing: ListingConfig {
                all_category_label: "All".to_string(),
                upcoming_only: true,
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                file_path: None,
                json: false,
            },
        }
    }
}

fn default_token_path() -> String {
    match std::env::var_os("HOME") {
        Some(home) => Path::new(&home)
            .join(".eventhub")
            .join("session.json")
            .to_string_lossy()
            .into_owned(),
        None => ".eventhub/session.json".to_string(),
    }
}
