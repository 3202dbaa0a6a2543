//! Authorization service implementation
//!
//! This service decodes bearer tokens and resolves the caller's role for a
//! (project, language) pair. Team members may edit within their team's
//! language; maintainers may edit any language of their projects.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AuthConfig;
use crate::database::Store;
use crate::models::{AuthUser, Project, User};
use crate::utils::errors::{LotteError, Result};
use crate::utils::logging;

/// Caller role for one (project, language) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anonymous,
    Registered,
    TeamMember,
    Maintainer,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    username: String,
    exp: i64,
}

/// Authorization service for role resolution and access gates
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn Store>,
    secret: String,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, config: &AuthConfig) -> Self {
        Self {
            store,
            secret: config.token_secret.clone(),
            token_ttl: Duration::seconds(config.token_ttl_seconds as i64),
        }
    }

    /// Issue a signed bearer token for a user
    pub fn issue_token(&self, user: &User) -> Result<String> {
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            exp: (Utc::now() + self.token_ttl).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| LotteError::Authentication(e.to_string()))
    }

    /// Decode a bearer token. Invalid or expired tokens yield no identity.
    pub fn decode_token(&self, token: &str) -> Option<AuthUser> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .ok()?;

        Some(AuthUser {
            id: data.claims.sub,
            username: data.claims.username,
        })
    }

    /// Resolve a caller from an optional bearer token.
    ///
    /// The account must still exist and be active; otherwise the request is
    /// treated as anonymous.
    pub async fn resolve_caller(&self, token: Option<&str>) -> Result<Option<AuthUser>> {
        let Some(token) = token else {
            return Ok(None);
        };
        let Some(claimed) = self.decode_token(token) else {
            debug!("Rejected bearer token");
            return Ok(None);
        };

        match self.store.find_user(claimed.id).await? {
            Some(user) if user.is_active => Ok(Some(AuthUser {
                id: user.id,
                username: user.username,
            })),
            _ => Ok(None),
        }
    }

    /// Resolve the caller's role for a (project, language) pair
    pub async fn role_for(
        &self,
        project: &Project,
        language: &str,
        caller: Option<&AuthUser>,
    ) -> Result<Role> {
        let Some(user) = caller else {
            return Ok(Role::Anonymous);
        };

        if self.store.is_maintainer(project.id, user.id).await? {
            return Ok(Role::Maintainer);
        }
        if self
            .store
            .is_team_member(project.id, language, user.id)
            .await?
        {
            return Ok(Role::TeamMember);
        }

        Ok(Role::Registered)
    }

    /// Gate for the editor surfaces (translate view, push, exit).
    ///
    /// Anonymous callers are sent to login; registered users outside the
    /// team, and team members of other languages, are denied.
    pub async fn require_edit_access(
        &self,
        project: &Project,
        language: &str,
        caller: Option<&AuthUser>,
        next: &str,
    ) -> Result<AuthUser> {
        match self.role_for(project, language, caller).await? {
            Role::Anonymous => Err(LotteError::LoginRequired {
                next: next.to_string(),
            }),
            Role::Registered => {
                logging::log_auth_decision(caller.map(|u| u.id), &project.slug, language, false);
                Err(LotteError::PermissionDenied(format!(
                    "No translation team for language '{}' includes this user",
                    language
                )))
            }
            Role::TeamMember | Role::Maintainer => {
                let user = caller.cloned().ok_or_else(|| {
                    LotteError::Authentication("caller vanished during role resolution".to_string())
                })?;
                logging::log_auth_decision(Some(user.id), &project.slug, language, true);
                Ok(user)
            }
        }
    }

    /// Gate for the delete surface: maintainers only, everyone else is 403
    pub async fn require_maintainer(
        &self,
        project: &Project,
        language: &str,
        caller: Option<&AuthUser>,
    ) -> Result<AuthUser> {
        match self.role_for(project, language, caller).await? {
            Role::Maintainer => {
                let user = caller.cloned().ok_or_else(|| {
                    LotteError::Authentication("caller vanished during role resolution".to_string())
                })?;
                logging::log_auth_decision(Some(user.id), &project.slug, language, true);
                Ok(user)
            }
            _ => {
                logging::log_auth_decision(caller.map(|u| u.id), &project.slug, language, false);
                Err(LotteError::PermissionDenied(
                    "Only project maintainers may delete translations".to_string(),
                ))
            }
        }
    }
}
