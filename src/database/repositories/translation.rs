//! Translation repository implementation
//!
//! Set-level writes (replace, delete) run inside a transaction so a plural
//! set is never observable half-updated.

use chrono::Utc;
use sqlx::PgPool;

use crate::i18n::PluralCategory;
use crate::models::translation::Translation;
use crate::utils::errors::LotteError;

#[derive(Debug, Clone)]
pub struct TranslationRepository {
    pool: PgPool,
}

impl TranslationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All translations for (entity, language), ordered by rule
    pub async fn translations_for(
        &self,
        entity_id: i64,
        language: &str,
    ) -> Result<Vec<Translation>, LotteError> {
        let translations = sqlx::query_as::<_, Translation>(
            "SELECT id, source_entity_id, language_code, rule, string, user_id, created_at, updated_at
             FROM translations WHERE source_entity_id = $1 AND language_code = $2
             ORDER BY rule ASC",
        )
        .bind(entity_id)
        .bind(language)
        .fetch_all(&self.pool)
        .await?;

        Ok(translations)
    }

    /// Count translation rows for (entity, language)
    pub async fn count(&self, entity_id: i64, language: &str) -> Result<i64, LotteError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM translations WHERE source_entity_id = $1 AND language_code = $2",
        )
        .bind(entity_id)
        .bind(language)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    /// Whether the entity carries at least one translation in `language`
    pub async fn exists_for(&self, entity_id: i64, language: &str) -> Result<bool, LotteError> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM translations WHERE source_entity_id = $1 AND language_code = $2)",
        )
        .bind(entity_id)
        .bind(language)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }

    /// Upsert the full category set for (entity, language) in one transaction.
    ///
    /// Existing rows keep their created_at so edits remain distinguishable
    /// from first translations.
    pub async fn replace_set(
        &self,
        entity_id: i64,
        language: &str,
        user_id: i64,
        rows: &[(PluralCategory, String)],
    ) -> Result<u64, LotteError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        for (category, string) in rows {
            sqlx::query(
                r#"
                INSERT INTO translations (source_entity_id, language_code, rule, string, user_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $6)
                ON CONFLICT (source_entity_id, language_code, rule)
                DO UPDATE SET string = EXCLUDED.string,
                              user_id = EXCLUDED.user_id,
                              updated_at = EXCLUDED.updated_at
                "#,
            )
            .bind(entity_id)
            .bind(language)
            .bind(category.rule_index())
            .bind(string)
            .bind(user_id)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(rows.len() as u64)
    }

    /// Delete every translation row for the given entities in `language`
    pub async fn delete_sets(
        &self,
        entity_ids: &[i64],
        language: &str,
    ) -> Result<u64, LotteError> {
        let result = sqlx::query(
            "DELETE FROM translations WHERE language_code = $1 AND source_entity_id = ANY($2)",
        )
        .bind(language)
        .bind(entity_ids)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
