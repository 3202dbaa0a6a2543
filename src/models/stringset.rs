//! Grid protocol types
//!
//! The editor drives the translation grid with the DataTables request
//! protocol; only the fields the editor actually sends are modeled here.

use serde::{Deserialize, Serialize};

use crate::models::translation::Translation;

fn default_display_length() -> i64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_sort_dir() -> String {
    "asc".to_string()
}

/// DataTables request parameters, accepted as query string or form body
#[derive(Debug, Clone, Deserialize)]
pub struct GridParams {
    #[serde(rename = "sEcho", default)]
    pub echo: Option<String>,
    #[serde(rename = "iDisplayStart", default)]
    pub display_start: i64,
    #[serde(rename = "iDisplayLength", default = "default_display_length")]
    pub display_length: i64,
    #[serde(rename = "sSearch", default)]
    pub search: Option<String>,
    #[serde(rename = "bEscapeRegex", default = "default_true")]
    pub escape_regex: bool,
    #[serde(rename = "iSortCol_0", default)]
    pub sort_col: i64,
    #[serde(rename = "sSortDir_0", default = "default_sort_dir")]
    pub sort_dir: String,
}

/// Search pattern after validation: literal substring or a vetted regex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    pub term: String,
    pub literal: bool,
}

/// Normalized grid query handed to the store
#[derive(Debug, Clone)]
pub struct StringsetQuery {
    pub offset: i64,
    pub limit: i64,
    pub search: Option<SearchPattern>,
    pub descending: bool,
}

/// One grid row: the entity plus its translations for the target language
#[derive(Debug, Clone)]
pub struct StringsetRow {
    pub entity_id: i64,
    pub string: String,
    pub context: String,
    pub occurrences: String,
    pub is_plural: bool,
    pub translations: Vec<Translation>,
}

/// A page of grid rows with the counts DataTables needs
#[derive(Debug, Clone)]
pub struct StringsetPage {
    pub total: i64,
    pub filtered: i64,
    pub rows: Vec<StringsetRow>,
}

/// DataTables response envelope
#[derive(Debug, Clone, Serialize)]
pub struct GridResponse {
    #[serde(rename = "sEcho", skip_serializing_if = "Option::is_none")]
    pub echo: Option<String>,
    #[serde(rename = "iTotalRecords")]
    pub total_records: i64,
    #[serde(rename = "iTotalDisplayRecords")]
    pub total_display_records: i64,
    #[serde(rename = "aaData")]
    pub data: Vec<serde_json::Value>,
}

/// Per-resource translation statistics for the editor bootstrap
#[derive(Debug, Clone, Serialize)]
pub struct ResourceStats {
    pub total: i64,
    pub translated: i64,
    pub untranslated: i64,
    pub modified: i64,
}
