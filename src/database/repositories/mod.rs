//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod project;
pub mod source_entity;
pub mod translation;
pub mod user;

// Re-export repositories
pub use project::ProjectRepository;
pub use source_entity::SourceEntityRepository;
pub use translation::TranslationRepository;
pub use user::UserRepository;
