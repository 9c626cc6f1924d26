//! Configuration management for Campusdesk

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{collections::HashMap, env};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Remote REST API settings
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL used by every store without an override
    pub base_url: String,
    /// Per-resource base URL overrides, keyed by resource name (e.g. `Book`)
    #[serde(default)]
    pub overrides: HashMap<String, String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// Bearer token to start with
    pub token: Option<String>,
    /// File the token is persisted to between runs
    pub token_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// When set, logs are also written to a daily rolling file in this directory
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix CAMPUSDESK_)
            .add_source(
                Environment::with_prefix("CAMPUSDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", env::var("API_BASE_URL").ok())?
            .set_override_option("auth.token", env::var("API_TOKEN").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl ApiConfig {
    /// Base URL for a resource, honouring overrides
    pub fn base_url_for(&self, resource: &str) -> &str {
        self.overrides
            .get(resource)
            .map(String::as_str)
            .unwrap_or(&self.base_url)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            overrides: HashMap::new(),
            timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_override() {
        let mut api = ApiConfig::default();
        api.overrides
            .insert("House".to_string(), "http://localhost:7000".to_string());

        assert_eq!(api.base_url_for("House"), "http://localhost:7000");
        assert_eq!(api.base_url_for("Book"), "http://localhost:5000/api");
    }

    #[test]
    fn test_defaults_deserialize_from_empty_source() {
        let config: AppConfig = Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, "pretty");
        assert!(config.auth.token.is_none());
    }
}
