//! Grid data service
//!
//! Normalizes DataTables request parameters and assembles grid pages and
//! per-resource statistics for the editor.

use std::sync::Arc;

use serde_json::json;

use crate::database::Store;
use crate::models::stringset::{
    GridParams, GridResponse, ResourceStats, SearchPattern, StringsetPage, StringsetQuery,
};
use crate::utils::errors::Result;

/// Largest page the grid will serve in one request
const MAX_PAGE_SIZE: i64 = 100;

/// Default page size when the client sends none or nonsense
const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Clone)]
pub struct StringsetService {
    store: Arc<dyn Store>,
}

impl StringsetService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Normalize raw grid parameters into a store query.
    ///
    /// A search term with `bEscapeRegex` unset is treated as a regular
    /// expression only when it actually compiles; anything else falls back
    /// to a literal substring match.
    pub fn normalize_params(params: &GridParams) -> StringsetQuery {
        let limit = if params.display_length <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            params.display_length.min(MAX_PAGE_SIZE)
        };

        let search = params
            .search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(|term| {
                let literal = params.escape_regex || regex::Regex::new(term).is_err();
                SearchPattern {
                    term: term.to_string(),
                    literal,
                }
            });

        StringsetQuery {
            offset: params.display_start.max(0),
            limit,
            search,
            descending: params.sort_dir.eq_ignore_ascii_case("desc"),
        }
    }

    /// One grid page in the DataTables response envelope
    pub async fn grid_page(
        &self,
        resource_id: i64,
        language: &str,
        params: &GridParams,
    ) -> Result<GridResponse> {
        let query = Self::normalize_params(params);
        let page = self.store.stringset_page(resource_id, language, &query).await?;

        Ok(Self::render_page(params.echo.clone(), page))
    }

    fn render_page(echo: Option<String>, page: StringsetPage) -> GridResponse {
        let data = page
            .rows
            .into_iter()
            .map(|row| {
                let mut translations = serde_json::Map::new();
                for translation in &row.translations {
                    if let Some(category) = translation.category() {
                        translations.insert(
                            category.name().to_string(),
                            json!(translation.string),
                        );
                    }
                }

                json!([
                    row.entity_id,
                    row.string,
                    row.context,
                    row.occurrences,
                    translations,
                    row.is_plural,
                ])
            })
            .collect();

        GridResponse {
            echo,
            total_records: page.total,
            total_display_records: page.filtered,
            data,
        }
    }

    /// Per-resource translation statistics
    pub async fn stats(&self, resource_id: i64, language: &str) -> Result<ResourceStats> {
        self.store.resource_stats(resource_id, language).await
    }
}
