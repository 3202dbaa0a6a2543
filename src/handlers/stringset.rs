//! Grid data handler
//!
//! Serves the DataTables protocol for the translation grid. The editor
//! sends the parameters as a form POST; plain GET with a query string is
//! accepted too. Grid data is readable by every caller, including
//! anonymous ones.

use std::sync::Arc;

use axum::extract::{Form, Path, Query, State};
use axum::Json;

use crate::handlers::{project_or_404, resource_or_404};
use crate::models::{GridParams, GridResponse};
use crate::state::AppContext;
use crate::utils::errors::Result;

pub async fn grid_query(
    State(ctx): State<Arc<AppContext>>,
    Path((project_slug, resource_slug, language)): Path<(String, String, String)>,
    Query(params): Query<GridParams>,
) -> Result<Json<GridResponse>> {
    grid_page(&ctx, &project_slug, &resource_slug, &language, params).await
}

pub async fn grid_form(
    State(ctx): State<Arc<AppContext>>,
    Path((project_slug, resource_slug, language)): Path<(String, String, String)>,
    Form(params): Form<GridParams>,
) -> Result<Json<GridResponse>> {
    grid_page(&ctx, &project_slug, &resource_slug, &language, params).await
}

async fn grid_page(
    ctx: &AppContext,
    project_slug: &str,
    resource_slug: &str,
    language: &str,
    params: GridParams,
) -> Result<Json<GridResponse>> {
    let project = project_or_404(ctx, project_slug).await?;
    let resource = resource_or_404(ctx, &project, resource_slug).await?;

    let page = ctx
        .stringset
        .grid_page(resource.id, language, &params)
        .await?;

    Ok(Json(page))
}
