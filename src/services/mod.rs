//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod stringset;
pub mod translation;

// Re-export commonly used services
pub use auth::{AuthService, Role};
pub use stringset::StringsetService;
pub use translation::{
    plan_push, PushPlan, TranslationService, MSG_INCOMPLETE_PLURALS, MSG_UPDATED,
};
