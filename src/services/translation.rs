//! Translation push service
//!
//! Implements the plural upsert rule: a submitted category mapping either
//! rejects (incomplete set), deletes the whole set (all empty) or upserts
//! the whole set (all filled). Completeness is judged per request, never
//! per delta, and set-level writes are atomic at the store.

use std::collections::HashMap;
use std::sync::Arc;

use crate::database::Store;
use crate::i18n::{PluralCategory, PluralRules};
use crate::models::translation::{EntityDetails, TranslationDetail};
use crate::models::{AuthUser, PushEntry, PushStringResult, SourceEntity};
use crate::utils::errors::{LotteError, Result};
use crate::utils::helpers::format_age;
use crate::utils::logging;

/// Message reported when a plural set is submitted incomplete
pub const MSG_INCOMPLETE_PLURALS: &str = "All the plural translations must be filled in";

/// Message reported on successful upsert or deletion
pub const MSG_UPDATED: &str = "Translation updated successfully";

/// Decision for one submitted category mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushPlan {
    /// Some but not all required categories filled; nothing is persisted
    Reject,
    /// Every required category empty; the stored set is removed
    DeleteAll,
    /// Every required category filled; exactly these rows are written
    Upsert(Vec<(PluralCategory, String)>),
}

/// Pure decision function over (required category set, submitted mapping).
///
/// Submitted categories the language does not require are ignored; required
/// categories missing from the mapping count as empty.
pub fn plan_push(
    required: &[PluralCategory],
    submitted: &HashMap<String, String>,
) -> PushPlan {
    let filled: Vec<(PluralCategory, String)> = required
        .iter()
        .filter_map(|category| {
            submitted
                .get(category.name())
                .filter(|value| !value.is_empty())
                .map(|value| (*category, value.clone()))
        })
        .collect();

    if filled.is_empty() {
        PushPlan::DeleteAll
    } else if filled.len() == required.len() {
        PushPlan::Upsert(filled)
    } else {
        PushPlan::Reject
    }
}

/// Applies push entries against the store
#[derive(Clone)]
pub struct TranslationService {
    store: Arc<dyn Store>,
    plural_rules: PluralRules,
    source_language: String,
}

impl TranslationService {
    pub fn new(store: Arc<dyn Store>, plural_rules: PluralRules, source_language: String) -> Self {
        Self {
            store,
            plural_rules,
            source_language,
        }
    }

    /// Required categories for an entity in a target language.
    ///
    /// Singular entities always require exactly the `other` form.
    fn required_for(&self, entity: &SourceEntity, language: &str) -> Vec<PluralCategory> {
        if entity.is_plural {
            self.plural_rules.required(language).to_vec()
        } else {
            vec![PluralCategory::Other]
        }
    }

    /// Apply one push entry.
    ///
    /// The entity must exist and carry a source-language translation; both
    /// failures surface as `UnknownSourceEntity`. Validation rejection is a
    /// reported outcome, not an error.
    pub async fn push_entry(
        &self,
        user: &AuthUser,
        language: &str,
        entry: &PushEntry,
    ) -> Result<PushStringResult> {
        let entity = self
            .store
            .find_source_entity(entry.id)
            .await?
            .ok_or(LotteError::UnknownSourceEntity { entity_id: entry.id })?;

        if !self
            .store
            .has_source_translation(entity.id, &self.source_language)
            .await?
        {
            return Err(LotteError::UnknownSourceEntity { entity_id: entry.id });
        }

        let required = self.required_for(&entity, language);

        match plan_push(&required, &entry.translations) {
            PushPlan::Reject => {
                let count = self.store.count_translations(entity.id, language).await? as u64;
                logging::log_push_outcome(user.id, entity.id, language, false, count);
                Ok(PushStringResult {
                    id: entity.id,
                    accepted: false,
                    message: MSG_INCOMPLETE_PLURALS.to_string(),
                    count,
                })
            }
            PushPlan::DeleteAll => {
                self.store
                    .delete_translation_sets(&[entity.id], language)
                    .await?;
                logging::log_push_outcome(user.id, entity.id, language, true, 0);
                Ok(PushStringResult {
                    id: entity.id,
                    accepted: true,
                    message: MSG_UPDATED.to_string(),
                    count: 0,
                })
            }
            PushPlan::Upsert(rows) => {
                let count = self
                    .store
                    .replace_translation_set(entity.id, language, user.id, &rows)
                    .await?;
                logging::log_push_outcome(user.id, entity.id, language, true, count);
                Ok(PushStringResult {
                    id: entity.id,
                    accepted: true,
                    message: MSG_UPDATED.to_string(),
                    count,
                })
            }
        }
    }

    /// Apply a whole push request: entries independently, in array order
    pub async fn push(
        &self,
        user: &AuthUser,
        language: &str,
        entries: &[PushEntry],
    ) -> Result<Vec<PushStringResult>> {
        let mut results = Vec::with_capacity(entries.len());
        for entry in entries {
            results.push(self.push_entry(user, language, entry).await?);
        }
        Ok(results)
    }

    /// Remove every translation row for the given entities in `language`
    pub async fn delete_translations(&self, entity_ids: &[i64], language: &str) -> Result<u64> {
        self.store.delete_translation_sets(entity_ids, language).await
    }

    /// Entity details for the snippet endpoint
    pub async fn entity_details(&self, entity_id: i64, language: &str) -> Result<EntityDetails> {
        let (entity, translations) = futures::try_join!(
            self.store.find_source_entity(entity_id),
            self.store.translations_for(entity_id, language),
        )?;
        let entity = entity.ok_or(LotteError::UnknownSourceEntity { entity_id })?;

        let translations = translations
            .into_iter()
            .filter_map(|t| {
                t.category().map(|category| TranslationDetail {
                    category,
                    string: t.string,
                    age: format_age(t.updated_at),
                })
            })
            .collect();

        Ok(EntityDetails {
            id: entity.id,
            string: entity.string,
            context: entity.context,
            occurrences: entity.occurrences,
            is_plural: entity.is_plural,
            translations,
        })
    }
}
