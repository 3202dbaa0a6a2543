//! Entity details snippet handler
//!
//! Returns the details panel data for one source entity: the source
//! string, its context and occurrences, and the stored translations with
//! their age. Open to every caller.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::models::EntityDetails;
use crate::state::AppContext;
use crate::utils::errors::Result;

pub async fn entity_details(
    State(ctx): State<Arc<AppContext>>,
    Path((entity_id, language)): Path<(i64, String)>,
) -> Result<Json<EntityDetails>> {
    let details = ctx.translations.entity_details(entity_id, &language).await?;
    Ok(Json(details))
}
