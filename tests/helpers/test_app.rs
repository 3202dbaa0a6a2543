//! Test application wiring
//!
//! Builds the full router over an in-memory store seeded with a small
//! project: one maintainer, one Arabic team member, one registered
//! bystander, a singular entity, a plural entity with a complete Arabic
//! set, and an orphan entity with no source translation.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use lotte::config::Settings;
use lotte::database::Store;
use lotte::i18n::PluralCategory;
use lotte::state::AppContext;

use super::memory_store::MemoryStore;

pub const MAINTAINER_ID: i64 = 1;
pub const TEAM_MEMBER_ID: i64 = 2;
pub const REGISTERED_ID: i64 = 3;

pub const SINGULAR_ENTITY_ID: i64 = 1;
pub const PLURAL_ENTITY_ID: i64 = 2;
pub const ORPHAN_ENTITY_ID: i64 = 3;

pub struct TestApp {
    pub ctx: Arc<AppContext>,
    pub store: Arc<MemoryStore>,
    pub router: Router,
    pub maintainer_token: String,
    pub team_member_token: String,
    pub registered_token: String,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());

    let maintainer = store.add_user(MAINTAINER_ID, "maintainer");
    let team_member = store.add_user(TEAM_MEMBER_ID, "team_member");
    let registered = store.add_user(REGISTERED_ID, "registered");

    let project = store.add_project(1, "proj", "en");
    store.add_maintainer(project.id, maintainer.id);
    store.add_team_member(project.id, "ar", team_member.id);

    let resource = store.add_resource(1, project.id, "res", "Resource");

    // Singular entity with a source-language translation
    store.add_entity(
        SINGULAR_ENTITY_ID,
        resource.id,
        "Key1",
        "Description1",
        "Occurrences1",
        false,
    );
    store.add_translation(
        SINGULAR_ENTITY_ID,
        "en",
        PluralCategory::Other,
        "foobar",
        maintainer.id,
    );

    // Plural entity with source strings and a complete Arabic set
    store.add_entity(
        PLURAL_ENTITY_ID,
        resource.id,
        "beautiful_dancer",
        "",
        "",
        true,
    );
    store.add_translation(
        PLURAL_ENTITY_ID,
        "en",
        PluralCategory::One,
        "SourceArabicTrans1",
        maintainer.id,
    );
    store.add_translation(
        PLURAL_ENTITY_ID,
        "en",
        PluralCategory::Other,
        "SourceArabicTrans2",
        maintainer.id,
    );
    for (index, category) in PluralCategory::ALL.iter().enumerate() {
        store.add_translation(
            PLURAL_ENTITY_ID,
            "ar",
            *category,
            &format!("ArabicTrans{index}"),
            maintainer.id,
        );
    }

    // Entity with no source-language translation at all
    store.add_entity(ORPHAN_ENTITY_ID, resource.id, "orphan_key", "", "", false);

    let mut settings = Settings::default();
    settings.auth.token_secret = "test-secret".to_string();

    let dyn_store: Arc<dyn Store> = store.clone();
    let ctx = Arc::new(AppContext::new(settings, dyn_store));
    let router = lotte::router(ctx.clone());

    let maintainer_token = ctx.auth.issue_token(&maintainer).unwrap();
    let team_member_token = ctx.auth.issue_token(&team_member).unwrap();
    let registered_token = ctx.auth.issue_token(&registered).unwrap();

    TestApp {
        ctx,
        store,
        router,
        maintainer_token,
        team_member_token,
        registered_token,
    }
}

fn with_auth(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: &TestApp, path: &str, token: Option<&str>) -> Response<Body> {
    let request = with_auth(Request::builder().method("GET").uri(path), token)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(
    app: &TestApp,
    path: &str,
    token: Option<&str>,
    body: &Value,
) -> Response<Body> {
    let request = with_auth(Request::builder().method("POST").uri(path), token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(
    app: &TestApp,
    path: &str,
    token: Option<&str>,
    form: &str,
) -> Response<Body> {
    let request = with_auth(Request::builder().method("POST").uri(path), token)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
