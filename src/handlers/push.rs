//! Translation push handler
//!
//! Accepts the editor's save payload and applies each entry through the
//! plural upsert rule. Validation rejections are reported per entry in a
//! 200 response; the message text is what the editor displays.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::Json;

use crate::handlers::project_or_404;
use crate::middleware::Caller;
use crate::models::{PushRequest, PushResponse};
use crate::state::AppContext;
use crate::utils::errors::Result;

pub async fn push_translations(
    State(ctx): State<Arc<AppContext>>,
    Path((project_slug, language)): Path<(String, String)>,
    uri: Uri,
    caller: Caller,
    Json(request): Json<PushRequest>,
) -> Result<Json<PushResponse>> {
    let project = project_or_404(&ctx, &project_slug).await?;

    let user = ctx
        .auth
        .require_edit_access(&project, &language, caller.0.as_ref(), uri.path())
        .await?;

    let strings = ctx
        .translations
        .push(&user, &language, &request.strings)
        .await?;

    Ok(Json(PushResponse { strings }))
}
