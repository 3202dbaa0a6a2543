//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Duration, Utc};

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Format the age of a translation for the details snippet.
///
/// Ages under an hour are reported in minutes ("0 minutes" for fresh rows),
/// matching what the editor displays next to each translation.
pub fn format_age(timestamp: DateTime<Utc>) -> String {
    let diff = Utc::now().signed_duration_since(timestamp);

    if diff < Duration::hours(1) {
        format!("{} minutes", diff.num_minutes().max(0))
    } else if diff < Duration::days(1) {
        format!("{} hours", diff.num_hours())
    } else if diff < Duration::weeks(1) {
        format!("{} days", diff.num_days())
    } else {
        format_timestamp(timestamp)
    }
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.len() <= max_length {
        text.to_string()
    } else {
        format!("{}...", &text[..max_length.saturating_sub(3)])
    }
}

/// Validate a project or resource slug
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 64
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
