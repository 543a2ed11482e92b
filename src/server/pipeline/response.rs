//! Localize and encode stages.

use axum::{
    http::{header::ACCEPT_LANGUAGE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    model::api::ApiEnvelope,
    server::{
        error::{
            api::{ApiError, ApiErrorKind},
            AppError,
        },
        localization::{Catalog, Translator},
    },
};

/// Turns the outcome of one endpoint call into its wire response.
pub struct Responder<'a> {
    endpoint: &'static str,
    translator: Translator<'a>,
}

impl<'a> Responder<'a> {
    /// Creates a responder translating into the languages the client accepts.
    ///
    /// # Arguments
    /// - `endpoint` - Endpoint name used in failure logs
    /// - `catalog` - Loaded message catalog
    /// - `headers` - Request headers, read for `Accept-Language`
    pub fn new(endpoint: &'static str, catalog: &'a Catalog, headers: &HeaderMap) -> Self {
        let accept_language = headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        Self {
            endpoint,
            translator: catalog.translator(accept_language),
        }
    }

    /// Encodes a success as `{"data": ..., "result": null}` with status 200, or a failure
    /// as `{"data": null, "result": {...}}` with the error's status and localized message.
    pub fn respond<T: Serialize>(&self, outcome: Result<T, AppError>) -> Response {
        match outcome {
            Ok(data) => (StatusCode::OK, Json(ApiEnvelope::success(data))).into_response(),
            Err(err) => self.fail(err),
        }
    }

    fn fail(&self, err: AppError) -> Response {
        let stage = err.stage();
        let mut api_error = ApiError::from(err);

        let cause = api_error
            .cause
            .as_ref()
            .map(|cause| cause.to_string())
            .unwrap_or_default();

        match api_error.kind {
            ApiErrorKind::InternalServer => tracing::error!(
                endpoint = self.endpoint,
                stage = %stage,
                error = api_error.kind.name(),
                "Request failed: {}",
                cause
            ),
            _ => tracing::info!(
                endpoint = self.endpoint,
                stage = %stage,
                error = api_error.kind.name(),
                "Request failed: {}",
                cause
            ),
        }

        api_error.localize(&self.translator);

        (
            api_error.kind.status(),
            Json(ApiEnvelope::<()>::failure(api_error.to_dto())),
        )
            .into_response()
    }
}
