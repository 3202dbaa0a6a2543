//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod project;
pub mod resource;
pub mod stringset;
pub mod translation;
pub mod user;

// Re-export commonly used models
pub use project::{CreateProjectRequest, CreateTeamRequest, Project, Team};
pub use resource::{CreateResourceRequest, CreateSourceEntityRequest, Resource, SourceEntity};
pub use stringset::{
    GridParams, GridResponse, ResourceStats, SearchPattern, StringsetPage, StringsetQuery,
    StringsetRow,
};
pub use translation::{
    DeleteRequest, DeleteResponse, EntityDetails, PushEntry, PushRequest, PushResponse,
    PushStringResult, Translation, TranslationDetail,
};
pub use user::{AuthUser, CreateUserRequest, User};
