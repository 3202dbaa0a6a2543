//! Database service layer
//!
//! This module provides a high-level interface to database operations and
//! implements the [`Store`] seam the services are written against.

use async_trait::async_trait;

use crate::database::{
    DatabasePool, ProjectRepository, SourceEntityRepository, TranslationRepository,
    UserRepository,
};
use crate::database::store::Store;
use crate::i18n::PluralCategory;
use crate::models::*;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub projects: ProjectRepository,
    pub entities: SourceEntityRepository,
    pub translations: TranslationRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            projects: ProjectRepository::new(pool.clone()),
            entities: SourceEntityRepository::new(pool.clone()),
            translations: TranslationRepository::new(pool),
        }
    }
}

#[async_trait]
impl Store for DatabaseService {
    async fn find_user(&self, id: i64) -> Result<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn find_project(&self, slug: &str) -> Result<Option<Project>> {
        self.projects.find_by_slug(slug).await
    }

    async fn find_resource(&self, project_id: i64, slug: &str) -> Result<Option<Resource>> {
        self.projects.find_resource(project_id, slug).await
    }

    async fn is_maintainer(&self, project_id: i64, user_id: i64) -> Result<bool> {
        self.projects.is_maintainer(project_id, user_id).await
    }

    async fn is_team_member(
        &self,
        project_id: i64,
        language: &str,
        user_id: i64,
    ) -> Result<bool> {
        self.projects
            .is_team_member(project_id, language, user_id)
            .await
    }

    async fn find_source_entity(&self, id: i64) -> Result<Option<SourceEntity>> {
        self.entities.find_by_id(id).await
    }

    async fn has_source_translation(&self, entity_id: i64, language: &str) -> Result<bool> {
        self.translations.exists_for(entity_id, language).await
    }

    async fn translations_for(&self, entity_id: i64, language: &str) -> Result<Vec<Translation>> {
        self.translations.translations_for(entity_id, language).await
    }

    async fn count_translations(&self, entity_id: i64, language: &str) -> Result<i64> {
        self.translations.count(entity_id, language).await
    }

    async fn replace_translation_set(
        &self,
        entity_id: i64,
        language: &str,
        user_id: i64,
        rows: &[(PluralCategory, String)],
    ) -> Result<u64> {
        self.translations
            .replace_set(entity_id, language, user_id, rows)
            .await
    }

    async fn delete_translation_sets(&self, entity_ids: &[i64], language: &str) -> Result<u64> {
        self.translations.delete_sets(entity_ids, language).await
    }

    async fn stringset_page(
        &self,
        resource_id: i64,
        language: &str,
        query: &StringsetQuery,
    ) -> Result<StringsetPage> {
        self.entities
            .stringset_page(resource_id, language, query)
            .await
    }

    async fn resource_stats(&self, resource_id: i64, language: &str) -> Result<ResourceStats> {
        self.entities.resource_stats(resource_id, language).await
    }
}
