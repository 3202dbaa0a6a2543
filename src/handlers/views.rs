//! Editor view handlers
//!
//! The translate view and the exit call are gated like the editor itself;
//! the read-only strings view is open to everyone.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use crate::handlers::{project_or_404, resource_or_404};
use crate::middleware::Caller;
use crate::state::AppContext;
use crate::utils::errors::Result;

/// Editor bootstrap for a (project, resource, language) triple
pub async fn translate_view(
    State(ctx): State<Arc<AppContext>>,
    Path((project_slug, resource_slug, language)): Path<(String, String, String)>,
    uri: Uri,
    caller: Caller,
) -> Result<Json<Value>> {
    let project = project_or_404(&ctx, &project_slug).await?;
    let resource = resource_or_404(&ctx, &project, &resource_slug).await?;

    ctx.auth
        .require_edit_access(&project, &language, caller.0.as_ref(), uri.path())
        .await?;

    let statistics = ctx.stringset.stats(resource.id, &language).await?;

    Ok(Json(json!({
        "project": project.slug,
        "resource": resource.name,
        "language": language,
        "statistics": statistics,
    })))
}

/// Read-only view of a resource's strings, open to every caller
pub async fn view_strings(
    State(ctx): State<Arc<AppContext>>,
    Path((project_slug, resource_slug, language)): Path<(String, String, String)>,
) -> Result<Json<Value>> {
    let project = project_or_404(&ctx, &project_slug).await?;
    let resource = resource_or_404(&ctx, &project, &resource_slug).await?;

    let statistics = ctx.stringset.stats(resource.id, &language).await?;

    Ok(Json(json!({
        "project": project.slug,
        "resource": resource.name,
        "language": language,
        "read_only": true,
        "statistics": statistics,
    })))
}

/// End of an editing session for (project, language)
pub async fn exit_editor(
    State(ctx): State<Arc<AppContext>>,
    Path((project_slug, language)): Path<(String, String)>,
    uri: Uri,
    caller: Caller,
) -> Result<Json<Value>> {
    let project = project_or_404(&ctx, &project_slug).await?;

    let user = ctx
        .auth
        .require_edit_access(&project, &language, caller.0.as_ref(), uri.path())
        .await?;

    info!(
        user_id = user.id,
        project = %project.slug,
        language = %language,
        "Editor session ended"
    );

    Ok(Json(json!({
        "project": project.slug,
        "language": language,
        "message": "Exited editor",
    })))
}
