//! Authentication middleware
//!
//! Extracts the caller identity from the Authorization header. A missing,
//! malformed or stale bearer token makes the request anonymous rather than
//! failing it; role gates decide later what anonymous callers may do.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::models::AuthUser;
use crate::state::AppContext;
use crate::utils::errors::LotteError;

/// Caller identity for the current request, if any
#[derive(Debug, Clone)]
pub struct Caller(pub Option<AuthUser>);

#[async_trait]
impl FromRequestParts<Arc<AppContext>> for Caller {
    type Rejection = LotteError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppContext>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let caller = state.auth.resolve_caller(token).await?;
        Ok(Caller(caller))
    }
}
