//! Resource and source entity models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    pub id: i64,
    pub project_id: i64,
    pub slug: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A translatable unit within a resource.
///
/// `string` is the source key shown in the editor; plural entities require a
/// full plural-category set per target language.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SourceEntity {
    pub id: i64,
    pub resource_id: i64,
    pub string: String,
    pub context: String,
    pub occurrences: String,
    pub is_plural: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResourceRequest {
    pub project_id: i64,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSourceEntityRequest {
    pub resource_id: i64,
    pub string: String,
    pub context: Option<String>,
    pub occurrences: Option<String>,
    pub is_plural: bool,
}
