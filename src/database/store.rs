//! Storage seam for the translation service
//!
//! Services talk to persistence through this trait so the upsert rule and
//! the HTTP layer can run against an in-memory store in tests. The sqlx
//! implementation lives in [`DatabaseService`](crate::database::DatabaseService).

use async_trait::async_trait;

use crate::i18n::PluralCategory;
use crate::models::{
    Project, Resource, ResourceStats, SourceEntity, StringsetPage, StringsetQuery, Translation,
    User,
};
use crate::utils::errors::Result;

#[async_trait]
pub trait Store: Send + Sync {
    // Users
    async fn find_user(&self, id: i64) -> Result<Option<User>>;

    // Projects and roles
    async fn find_project(&self, slug: &str) -> Result<Option<Project>>;
    async fn find_resource(&self, project_id: i64, slug: &str) -> Result<Option<Resource>>;
    async fn is_maintainer(&self, project_id: i64, user_id: i64) -> Result<bool>;
    async fn is_team_member(&self, project_id: i64, language: &str, user_id: i64) -> Result<bool>;

    // Source entities
    async fn find_source_entity(&self, id: i64) -> Result<Option<SourceEntity>>;
    async fn has_source_translation(&self, entity_id: i64, language: &str) -> Result<bool>;

    // Translations. `replace_translation_set` and `delete_translation_sets`
    // must apply atomically: readers never observe a partial plural set.
    async fn translations_for(&self, entity_id: i64, language: &str) -> Result<Vec<Translation>>;
    async fn count_translations(&self, entity_id: i64, language: &str) -> Result<i64>;
    async fn replace_translation_set(
        &self,
        entity_id: i64,
        language: &str,
        user_id: i64,
        rows: &[(PluralCategory, String)],
    ) -> Result<u64>;
    async fn delete_translation_sets(&self, entity_ids: &[i64], language: &str) -> Result<u64>;

    // Grid
    async fn stringset_page(
        &self,
        resource_id: i64,
        language: &str,
        query: &StringsetQuery,
    ) -> Result<StringsetPage>;
    async fn resource_stats(&self, resource_id: i64, language: &str) -> Result<ResourceStats>;
}
