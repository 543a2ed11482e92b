use axum::{extract::State, http::HeaderMap, response::Response};

use crate::{
    model::{api::ApiResultDto, health::HealthDto},
    server::{error::AppError, pipeline::Responder, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

const HEALTH: &str = "Health";

/// Liveness check.
///
/// Answers without authentication and without touching the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running; wrapped in the data envelope", body = HealthDto),
        (status = 500, description = "Internal server error", body = ApiResultDto)
    ),
)]
pub async fn health(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let responder = Responder::new(HEALTH, &state.catalog, &headers);

    responder.respond(Ok::<_, AppError>(HealthDto {
        ping: "Pong".to_string(),
    }))
}
