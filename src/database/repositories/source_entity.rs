//! Source entity repository implementation
//!
//! Besides entity CRUD this repository serves the grid: paged, searched and
//! sorted pages of entities with their translations for a target language.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::PgPool;

use crate::models::resource::{CreateSourceEntityRequest, SourceEntity};
use crate::models::stringset::{ResourceStats, StringsetPage, StringsetQuery, StringsetRow};
use crate::models::translation::Translation;
use crate::utils::errors::LotteError;

#[derive(Debug, Clone)]
pub struct SourceEntityRepository {
    pool: PgPool,
}

impl SourceEntityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new source entity
    pub async fn create(
        &self,
        request: CreateSourceEntityRequest,
    ) -> Result<SourceEntity, LotteError> {
        let entity = sqlx::query_as::<_, SourceEntity>(
            r#"
            INSERT INTO source_entities (resource_id, string, context, occurrences, is_plural, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, resource_id, string, context, occurrences, is_plural, created_at
            "#,
        )
        .bind(request.resource_id)
        .bind(request.string)
        .bind(request.context.unwrap_or_default())
        .bind(request.occurrences.unwrap_or_default())
        .bind(request.is_plural)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(entity)
    }

    /// Find source entity by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<SourceEntity>, LotteError> {
        let entity = sqlx::query_as::<_, SourceEntity>(
            "SELECT id, resource_id, string, context, occurrences, is_plural, created_at FROM source_entities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity)
    }

    /// One grid page of entities with their translations for `language`.
    ///
    /// The search term matches source strings and translation strings; the
    /// only sortable grid column is the source string.
    pub async fn stringset_page(
        &self,
        resource_id: i64,
        language: &str,
        query: &StringsetQuery,
    ) -> Result<StringsetPage, LotteError> {
        let total: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM source_entities WHERE resource_id = $1")
                .bind(resource_id)
                .fetch_one(&self.pool)
                .await?;

        let order = if query.descending { "DESC" } else { "ASC" };

        let (filtered, entities) = match &query.search {
            Some(pattern) => {
                // ILIKE for literal terms, case-insensitive regex otherwise
                let op = if pattern.literal { "ILIKE" } else { "~*" };
                let term = if pattern.literal {
                    format!("%{}%", pattern.term)
                } else {
                    pattern.term.clone()
                };

                let where_clause = format!(
                    "e.resource_id = $1 AND (e.string {op} $2 OR EXISTS (
                        SELECT 1 FROM translations t
                        WHERE t.source_entity_id = e.id
                          AND t.language_code = $3 AND t.string {op} $2))"
                );

                let filtered: (i64,) = sqlx::query_as(&format!(
                    "SELECT COUNT(*) FROM source_entities e WHERE {where_clause}"
                ))
                .bind(resource_id)
                .bind(&term)
                .bind(language)
                .fetch_one(&self.pool)
                .await?;

                let entities = sqlx::query_as::<_, SourceEntity>(&format!(
                    "SELECT e.id, e.resource_id, e.string, e.context, e.occurrences, e.is_plural, e.created_at
                     FROM source_entities e WHERE {where_clause}
                     ORDER BY e.string {order} LIMIT $4 OFFSET $5"
                ))
                .bind(resource_id)
                .bind(&term)
                .bind(language)
                .bind(query.limit)
                .bind(query.offset)
                .fetch_all(&self.pool)
                .await?;

                (filtered.0, entities)
            }
            None => {
                let entities = sqlx::query_as::<_, SourceEntity>(&format!(
                    "SELECT id, resource_id, string, context, occurrences, is_plural, created_at
                     FROM source_entities WHERE resource_id = $1
                     ORDER BY string {order} LIMIT $2 OFFSET $3"
                ))
                .bind(resource_id)
                .bind(query.limit)
                .bind(query.offset)
                .fetch_all(&self.pool)
                .await?;

                (total.0, entities)
            }
        };

        let ids: Vec<i64> = entities.iter().map(|e| e.id).collect();
        let translations = sqlx::query_as::<_, Translation>(
            "SELECT id, source_entity_id, language_code, rule, string, user_id, created_at, updated_at
             FROM translations WHERE language_code = $1 AND source_entity_id = ANY($2)
             ORDER BY rule ASC",
        )
        .bind(language)
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_entity: HashMap<i64, Vec<Translation>> = HashMap::new();
        for translation in translations {
            by_entity
                .entry(translation.source_entity_id)
                .or_default()
                .push(translation);
        }

        let rows = entities
            .into_iter()
            .map(|entity| StringsetRow {
                entity_id: entity.id,
                string: entity.string,
                context: entity.context,
                occurrences: entity.occurrences,
                is_plural: entity.is_plural,
                translations: by_entity.remove(&entity.id).unwrap_or_default(),
            })
            .collect();

        Ok(StringsetPage {
            total: total.0,
            filtered,
            rows,
        })
    }

    /// Translation statistics for a resource in a target language
    pub async fn resource_stats(
        &self,
        resource_id: i64,
        language: &str,
    ) -> Result<ResourceStats, LotteError> {
        let total: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM source_entities WHERE resource_id = $1")
                .bind(resource_id)
                .fetch_one(&self.pool)
                .await?;

        let translated: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(DISTINCT e.id) FROM source_entities e
            JOIN translations t ON t.source_entity_id = e.id AND t.language_code = $2
            WHERE e.resource_id = $1
            "#,
        )
        .bind(resource_id)
        .bind(language)
        .fetch_one(&self.pool)
        .await?;

        let modified: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(DISTINCT e.id) FROM source_entities e
            JOIN translations t ON t.source_entity_id = e.id AND t.language_code = $2
            WHERE e.resource_id = $1 AND t.updated_at > t.created_at
            "#,
        )
        .bind(resource_id)
        .bind(language)
        .fetch_one(&self.pool)
        .await?;

        Ok(ResourceStats {
            total: total.0,
            translated: translated.0,
            untranslated: total.0 - translated.0,
            modified: modified.0,
        })
    }
}
