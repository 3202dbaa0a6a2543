//! HTTP handlers module
//!
//! This module contains all endpoint handlers and the application router:
//! editor views, grid data, translation pushes and deletions, and the
//! entity details snippet.

pub mod delete;
pub mod push;
pub mod snippet;
pub mod stringset;
pub mod views;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::middleware;
use crate::models::{Project, Resource};
use crate::state::AppContext;
use crate::utils::errors::{LotteError, Result};

/// Build the application router
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/projects/:project/resources/:resource/translate/:lang",
            get(views::translate_view),
        )
        .route(
            "/projects/:project/resources/:resource/strings/:lang",
            get(views::view_strings),
        )
        .route(
            "/projects/:project/resources/:resource/stringset/:lang",
            get(stringset::grid_query).post(stringset::grid_form),
        )
        .route("/projects/:project/push/:lang", post(push::push_translations))
        .route(
            "/projects/:project/delete/:lang",
            get(delete::reject_get).post(delete::delete_translations),
        )
        .route(
            "/projects/:project/exit/:lang",
            get(views::exit_editor).post(views::exit_editor),
        )
        .route("/entities/:entity/details/:lang", get(snippet::entity_details))
        .layer(axum::middleware::from_fn(middleware::logging::trace_requests))
        .with_state(ctx)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Look up a project by slug or fail the request with 404
pub(crate) async fn project_or_404(ctx: &AppContext, slug: &str) -> Result<Project> {
    ctx.store
        .find_project(slug)
        .await?
        .ok_or_else(|| LotteError::ProjectNotFound {
            slug: slug.to_string(),
        })
}

/// Look up a resource within a project or fail the request with 404
pub(crate) async fn resource_or_404(
    ctx: &AppContext,
    project: &Project,
    slug: &str,
) -> Result<Resource> {
    ctx.store
        .find_resource(project.id, slug)
        .await?
        .ok_or_else(|| LotteError::ResourceNotFound {
            slug: slug.to_string(),
        })
}
