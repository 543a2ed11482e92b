use std::path::Path;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    config::HttpLimits,
    localization::{Catalog, DEFAULT_LANGUAGE},
    model::principal::Principal,
    router,
    state::AppState,
    util::{password::digest_password, token::TokenCodec},
};


const SECRET: &str = "controller-secret";

/// Builds the application router over `db` with the shipped language files.
fn app(db: &DatabaseConnection) -> Router {
    let directory = Path::new(env!("CARGO_MANIFEST_DIR")).join("locales");
    let catalog = Catalog::load_dir(&directory, DEFAULT_LANGUAGE).unwrap();

    router::router().with_state(AppState::new(db.clone(), catalog, TokenCodec::new(SECRET)))
}

fn token_for(user_id: i32) -> String {
    TokenCodec::new(SECRET)
        .issue(Principal::new(user_id))
        .unwrap()
        .token
}

fn post(uri: &str, token: Option<&str>, language: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("token", token);
    }
    if let Some(language) = language {
        builder = builder.header("accept-language", language);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: Option<&str>, language: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("token", token);
    }
    if let Some(language) = language {
        builder = builder.header("accept-language", language);
    }

    builder.body(Body::empty()).unwrap()
}

/// Sends a request through the router and decodes the JSON envelope.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Asserts a failure envelope with the given error name and code.
fn assert_failure(body: &Value, name: &str, code: u64, status: StatusCode) {
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["result"]["name"], name);
    assert_eq!(body["result"]["code"], code);
    assert_eq!(body["result"]["statusCode"], status.as_u16());
}
