use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use chrono::{Duration, Utc};
use tower::ServiceExt;

use crate::server::{
    error::auth::AuthError,
    middleware::{auth::AuthGuard, limit::limit_header_size},
    model::principal::Principal,
    util::token::TokenCodec,
};

mod header_limit;
