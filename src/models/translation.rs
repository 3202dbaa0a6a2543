//! Translation model and push wire types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::i18n::PluralCategory;

/// One stored translation string for a (source entity, language, rule) triple
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Translation {
    pub id: i64,
    pub source_entity_id: i64,
    pub language_code: String,
    pub rule: i16,
    pub string: String,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Translation {
    /// Plural category this row is stored under
    pub fn category(&self) -> Option<PluralCategory> {
        PluralCategory::from_rule_index(self.rule)
    }
}

/// Request body for the push endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PushRequest {
    pub strings: Vec<PushEntry>,
}

/// One submitted entity edit: category name to submitted string.
///
/// Category names the target language does not require are ignored; required
/// names absent from the mapping count as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct PushEntry {
    pub id: i64,
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

/// Per-entry outcome reported back to the editor
#[derive(Debug, Clone, Serialize)]
pub struct PushStringResult {
    pub id: i64,
    pub accepted: bool,
    pub message: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PushResponse {
    pub strings: Vec<PushStringResult>,
}

/// Request body for the delete endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRequest {
    pub to_delete: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
    pub message: String,
}

/// Entity details returned by the snippet endpoint
#[derive(Debug, Clone, Serialize)]
pub struct EntityDetails {
    pub id: i64,
    pub string: String,
    pub context: String,
    pub occurrences: String,
    pub is_plural: bool,
    pub translations: Vec<TranslationDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslationDetail {
    pub category: PluralCategory,
    pub string: String,
    pub age: String,
}
