//! In-memory store for driving the router without a database
//!
//! Implements the same atomicity contract as the sqlx store: set-level
//! writes happen under one lock, so no reader sees a partial plural set.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use lotte::database::Store;
use lotte::i18n::PluralCategory;
use lotte::models::{
    Project, Resource, ResourceStats, SearchPattern, SourceEntity, StringsetPage, StringsetQuery,
    StringsetRow, Translation, User,
};
use lotte::utils::errors::Result;

#[derive(Default)]
struct Inner {
    users: HashMap<i64, User>,
    projects: HashMap<i64, Project>,
    resources: HashMap<i64, Resource>,
    maintainers: HashSet<(i64, i64)>,
    team_members: HashSet<(i64, String, i64)>,
    entities: HashMap<i64, SourceEntity>,
    translations: Vec<Translation>,
    next_translation_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, id: i64, username: &str) -> User {
        let now = Utc::now();
        let user = User {
            id,
            username: username.to_string(),
            email: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.inner.lock().unwrap().users.insert(id, user.clone());
        user
    }

    pub fn add_project(&self, id: i64, slug: &str, source_language: &str) -> Project {
        let now = Utc::now();
        let project = Project {
            id,
            slug: slug.to_string(),
            name: slug.to_string(),
            source_language_code: source_language.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.inner
            .lock()
            .unwrap()
            .projects
            .insert(id, project.clone());
        project
    }

    pub fn add_resource(&self, id: i64, project_id: i64, slug: &str, name: &str) -> Resource {
        let resource = Resource {
            id,
            project_id,
            slug: slug.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.inner
            .lock()
            .unwrap()
            .resources
            .insert(id, resource.clone());
        resource
    }

    pub fn add_maintainer(&self, project_id: i64, user_id: i64) {
        self.inner
            .lock()
            .unwrap()
            .maintainers
            .insert((project_id, user_id));
    }

    pub fn add_team_member(&self, project_id: i64, language: &str, user_id: i64) {
        self.inner
            .lock()
            .unwrap()
            .team_members
            .insert((project_id, language.to_string(), user_id));
    }

    pub fn add_entity(
        &self,
        id: i64,
        resource_id: i64,
        string: &str,
        context: &str,
        occurrences: &str,
        is_plural: bool,
    ) -> SourceEntity {
        let entity = SourceEntity {
            id,
            resource_id,
            string: string.to_string(),
            context: context.to_string(),
            occurrences: occurrences.to_string(),
            is_plural,
            created_at: Utc::now(),
        };
        self.inner
            .lock()
            .unwrap()
            .entities
            .insert(id, entity.clone());
        entity
    }

    pub fn add_translation(
        &self,
        entity_id: i64,
        language: &str,
        category: PluralCategory,
        string: &str,
        user_id: i64,
    ) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_translation_id += 1;
        let now = Utc::now();
        let translation = Translation {
            id: inner.next_translation_id,
            source_entity_id: entity_id,
            language_code: language.to_string(),
            rule: category.rule_index(),
            string: string.to_string(),
            user_id: Some(user_id),
            created_at: now,
            updated_at: now,
        };
        inner.translations.push(translation);
    }

    pub fn translation_count(&self, entity_id: i64, language: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .translations
            .iter()
            .filter(|t| t.source_entity_id == entity_id && t.language_code == language)
            .count()
    }

    pub fn translation_value(
        &self,
        entity_id: i64,
        language: &str,
        category: PluralCategory,
    ) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .translations
            .iter()
            .find(|t| {
                t.source_entity_id == entity_id
                    && t.language_code == language
                    && t.rule == category.rule_index()
            })
            .map(|t| t.string.clone())
    }
}

fn matches_pattern(pattern: &SearchPattern, haystack: &str) -> bool {
    if pattern.literal {
        haystack.to_lowercase().contains(&pattern.term.to_lowercase())
    } else {
        regex::Regex::new(&format!("(?i){}", pattern.term))
            .map(|re| re.is_match(haystack))
            .unwrap_or(false)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user(&self, id: i64) -> Result<Option<User>> {
        Ok(self.inner.lock().unwrap().users.get(&id).cloned())
    }

    async fn find_project(&self, slug: &str) -> Result<Option<Project>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .projects
            .values()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn find_resource(&self, project_id: i64, slug: &str) -> Result<Option<Resource>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .resources
            .values()
            .find(|r| r.project_id == project_id && r.slug == slug)
            .cloned())
    }

    async fn is_maintainer(&self, project_id: i64, user_id: i64) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .maintainers
            .contains(&(project_id, user_id)))
    }

    async fn is_team_member(&self, project_id: i64, language: &str, user_id: i64) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .team_members
            .contains(&(project_id, language.to_string(), user_id)))
    }

    async fn find_source_entity(&self, id: i64) -> Result<Option<SourceEntity>> {
        Ok(self.inner.lock().unwrap().entities.get(&id).cloned())
    }

    async fn has_source_translation(&self, entity_id: i64, language: &str) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .translations
            .iter()
            .any(|t| t.source_entity_id == entity_id && t.language_code == language))
    }

    async fn translations_for(&self, entity_id: i64, language: &str) -> Result<Vec<Translation>> {
        let mut translations: Vec<Translation> = self
            .inner
            .lock()
            .unwrap()
            .translations
            .iter()
            .filter(|t| t.source_entity_id == entity_id && t.language_code == language)
            .cloned()
            .collect();
        translations.sort_by_key(|t| t.rule);
        Ok(translations)
    }

    async fn count_translations(&self, entity_id: i64, language: &str) -> Result<i64> {
        Ok(self.translation_count(entity_id, language) as i64)
    }

    async fn replace_translation_set(
        &self,
        entity_id: i64,
        language: &str,
        user_id: i64,
        rows: &[(PluralCategory, String)],
    ) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let now = Utc::now();

        for (category, string) in rows {
            let existing = inner.translations.iter_mut().find(|t| {
                t.source_entity_id == entity_id
                    && t.language_code == language
                    && t.rule == category.rule_index()
            });

            match existing {
                Some(translation) => {
                    translation.string = string.clone();
                    translation.user_id = Some(user_id);
                    translation.updated_at = now;
                }
                None => {
                    inner.next_translation_id += 1;
                    let id = inner.next_translation_id;
                    inner.translations.push(Translation {
                        id,
                        source_entity_id: entity_id,
                        language_code: language.to_string(),
                        rule: category.rule_index(),
                        string: string.clone(),
                        user_id: Some(user_id),
                        created_at: now,
                        updated_at: now,
                    });
                }
            }
        }

        Ok(rows.len() as u64)
    }

    async fn delete_translation_sets(&self, entity_ids: &[i64], language: &str) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.translations.len();
        inner
            .translations
            .retain(|t| !(entity_ids.contains(&t.source_entity_id) && t.language_code == language));
        Ok((before - inner.translations.len()) as u64)
    }

    async fn stringset_page(
        &self,
        resource_id: i64,
        language: &str,
        query: &StringsetQuery,
    ) -> Result<StringsetPage> {
        let inner = self.inner.lock().unwrap();

        let mut entities: Vec<&SourceEntity> = inner
            .entities
            .values()
            .filter(|e| e.resource_id == resource_id)
            .collect();
        let total = entities.len() as i64;

        if let Some(pattern) = &query.search {
            entities.retain(|entity| {
                matches_pattern(pattern, &entity.string)
                    || inner.translations.iter().any(|t| {
                        t.source_entity_id == entity.id
                            && t.language_code == language
                            && matches_pattern(pattern, &t.string)
                    })
            });
        }
        let filtered = entities.len() as i64;

        entities.sort_by(|a, b| {
            if query.descending {
                b.string.cmp(&a.string)
            } else {
                a.string.cmp(&b.string)
            }
        });

        let rows = entities
            .into_iter()
            .skip(query.offset.max(0) as usize)
            .take(query.limit.max(0) as usize)
            .map(|entity| {
                let mut translations: Vec<Translation> = inner
                    .translations
                    .iter()
                    .filter(|t| t.source_entity_id == entity.id && t.language_code == language)
                    .cloned()
                    .collect();
                translations.sort_by_key(|t| t.rule);

                StringsetRow {
                    entity_id: entity.id,
                    string: entity.string.clone(),
                    context: entity.context.clone(),
                    occurrences: entity.occurrences.clone(),
                    is_plural: entity.is_plural,
                    translations,
                }
            })
            .collect();

        Ok(StringsetPage {
            total,
            filtered,
            rows,
        })
    }

    async fn resource_stats(&self, resource_id: i64, language: &str) -> Result<ResourceStats> {
        let inner = self.inner.lock().unwrap();

        let entities: Vec<&SourceEntity> = inner
            .entities
            .values()
            .filter(|e| e.resource_id == resource_id)
            .collect();
        let total = entities.len() as i64;

        let translated = entities
            .iter()
            .filter(|e| {
                inner
                    .translations
                    .iter()
                    .any(|t| t.source_entity_id == e.id && t.language_code == language)
            })
            .count() as i64;

        let modified = entities
            .iter()
            .filter(|e| {
                inner.translations.iter().any(|t| {
                    t.source_entity_id == e.id
                        && t.language_code == language
                        && t.updated_at > t.created_at
                })
            })
            .count() as i64;

        Ok(ResourceStats {
            total,
            translated,
            untranslated: total - translated,
            modified,
        })
    }
}
