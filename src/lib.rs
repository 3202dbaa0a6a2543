//! Lotte translation service
//!
//! Backend for the in-browser translation editor of a localization
//! platform. This library provides the translation grid endpoints, the
//! plural-aware translation push rule, per-role authorization and the
//! supporting persistence layer.

pub mod config;
pub mod database;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LotteError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::router;
pub use i18n::{PluralCategory, PluralRules};
pub use state::AppContext;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
