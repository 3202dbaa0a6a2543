//! Internationalization module
//!
//! This module holds the plural rule table: which plural categories a
//! language requires for a complete translation set.

pub mod plurals;

// Re-export commonly used i18n components
pub use plurals::{PluralCategory, PluralRules};
