//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::i18n::plurals::PluralCategory;
use crate::utils::errors::{LotteError, Result};

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_auth_config(&settings.auth)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.bind_addr.is_empty() {
        return Err(LotteError::Config("Server bind address is required".to_string()));
    }

    if config.bind_addr.parse::<std::net::SocketAddr>().is_err() {
        return Err(LotteError::Config(format!(
            "Invalid server bind address: {}",
            config.bind_addr
        )));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(LotteError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(LotteError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(LotteError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate authentication configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.token_secret.is_empty() {
        return Err(LotteError::Config("Auth token secret is required".to_string()));
    }

    if config.token_ttl_seconds == 0 {
        return Err(LotteError::Config(
            "Token TTL must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.source_language.is_empty() {
        return Err(LotteError::Config("Source language is required".to_string()));
    }

    for (language, categories) in &config.plural_rules {
        if categories.is_empty() {
            return Err(LotteError::Config(format!(
                "Plural rule override for '{}' must list at least one category",
                language
            )));
        }

        for name in categories {
            if PluralCategory::from_name(name).is_none() {
                return Err(LotteError::Config(format!(
                    "Unknown plural category '{}' in override for '{}'",
                    name, language
                )));
            }
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LotteError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LotteError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
