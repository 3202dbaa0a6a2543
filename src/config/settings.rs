//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Authentication token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub token_secret: String,
    pub token_ttl_seconds: u64,
}

/// Internationalization configuration
///
/// `plural_rules` overrides or extends the built-in language table; each
/// entry maps a language code to its ordered required plural categories.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub source_language: String,
    #[serde(default)]
    pub plural_rules: HashMap<String, Vec<String>>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("LOTTE"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LotteError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_addr: "127.0.0.1:8000".to_string(),
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/lotte".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            auth: AuthConfig {
                token_secret: String::new(),
                token_ttl_seconds: 86400,
            },
            i18n: I18nConfig {
                source_language: "en".to_string(),
                plural_rules: HashMap::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/lotte".to_string(),
            },
        }
    }
}
