//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Lotte service.

use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "lotte.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log a translation push outcome with structured data
pub fn log_push_outcome(
    user_id: i64,
    entity_id: i64,
    language: &str,
    accepted: bool,
    rows: u64,
) {
    if accepted {
        info!(
            user_id = user_id,
            entity_id = entity_id,
            language = language,
            rows = rows,
            "Translation set updated"
        );
    } else {
        debug!(
            user_id = user_id,
            entity_id = entity_id,
            language = language,
            "Translation push rejected"
        );
    }
}

/// Log an authorization decision
pub fn log_auth_decision(user_id: Option<i64>, project: &str, language: &str, allowed: bool) {
    if allowed {
        debug!(
            user_id = user_id,
            project = project,
            language = language,
            "Access granted"
        );
    } else {
        warn!(
            user_id = user_id,
            project = project,
            language = language,
            "Access denied"
        );
    }
}

/// Log translation deletions performed by maintainers
pub fn log_translation_delete(user_id: i64, project: &str, language: &str, deleted: u64) {
    warn!(
        user_id = user_id,
        project = project,
        language = language,
        deleted = deleted,
        "Translations deleted"
    );
}
