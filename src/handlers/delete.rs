//! Translation delete handler
//!
//! Maintainer-only surface: removes every translation row for the listed
//! entities in the target language. GET is rejected with 400 so a stray
//! link can never drop data.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::handlers::project_or_404;
use crate::middleware::Caller;
use crate::models::{DeleteRequest, DeleteResponse};
use crate::state::AppContext;
use crate::utils::errors::{LotteError, Result};
use crate::utils::logging;

pub async fn delete_translations(
    State(ctx): State<Arc<AppContext>>,
    Path((project_slug, language)): Path<(String, String)>,
    caller: Caller,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>> {
    let project = project_or_404(&ctx, &project_slug).await?;

    let user = ctx
        .auth
        .require_maintainer(&project, &language, caller.0.as_ref())
        .await?;

    let deleted = ctx
        .translations
        .delete_translations(&request.to_delete, &language)
        .await?;

    logging::log_translation_delete(user.id, &project.slug, &language, deleted);

    Ok(Json(DeleteResponse {
        deleted,
        message: "Translations deleted".to_string(),
    }))
}

/// Deletion is POST-only; a GET from a maintainer is a bad request
pub async fn reject_get(
    State(ctx): State<Arc<AppContext>>,
    Path((project_slug, language)): Path<(String, String)>,
    caller: Caller,
) -> Result<Json<DeleteResponse>> {
    let project = project_or_404(&ctx, &project_slug).await?;

    ctx.auth
        .require_maintainer(&project, &language, caller.0.as_ref())
        .await?;

    Err(LotteError::InvalidRequest(
        "Translations can only be deleted with a POST request".to_string(),
    ))
}
