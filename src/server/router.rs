use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::{RequestBodyTimeoutLayer, TimeoutLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        account::{SignInBody, SignInDto},
        api::ApiResultDto,
        health::HealthDto,
        reservation::{
            CreateReservationBody, CreateReservationDto, ReservationDto, ReservationListDto,
            UpdateReservationBody, UpdateReservationDto,
        },
    },
    server::{
        controller::{
            account::{self, ACCOUNT_TAG},
            health::{self, HEALTH_TAG},
            reservation::{self, RESERVATION_TAG},
        },
        config::HttpLimits,
        middleware::{auth::TOKEN_HEADER, limit::limit_header_size},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel California", description = "Hotel reservation API"),
    paths(
        health::health,
        account::sign_in,
        reservation::create_reservation,
        reservation::update_reservation,
        reservation::find_reservation,
        reservation::find_reservations,
    ),
    components(schemas(
        ApiResultDto,
        HealthDto,
        SignInBody,
        SignInDto,
        CreateReservationBody,
        CreateReservationDto,
        UpdateReservationBody,
        UpdateReservationDto,
        ReservationDto,
        ReservationListDto,
    )),
    modifiers(&TokenSecurity),
    tags(
        (name = HEALTH_TAG, description = "Liveness check"),
        (name = ACCOUNT_TAG, description = "Sign-in and access tokens"),
        (name = RESERVATION_TAG, description = "Reservations of the signed-in user"),
    )
)]
pub struct ApiDoc;

/// Declares the `token` header used by authenticated endpoints.
struct TokenSecurity;

impl Modify for TokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(TOKEN_HEADER))),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/v1/account/sign-in", post(account::sign_in))
        .route("/v1/reservation/new", post(reservation::create_reservation))
        .route("/v1/reservation/update", post(reservation::update_reservation))
        .route("/v1/reservation", get(reservation::find_reservation))
        .route("/v1/reservations", get(reservation::find_reservations))
}

/// Swagger UI at `/docs` serving the generated OpenAPI document.
pub fn docs() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

/// Full application: routes, documentation and the per-request layers.
///
/// Requests whose headers exceed `limits.max_header_bytes` get 431. Bodies not received
/// within `limits.read_timeout` fail the request, and handlers still running after
/// `limits.write_timeout` are answered with 408.
pub fn app(state: AppState, limits: HttpLimits) -> Router {
    router()
        .with_state(state)
        .merge(docs())
        .layer(middleware::from_fn_with_state(
            limits.max_header_bytes,
            limit_header_size,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            limits.write_timeout,
        ))
        .layer(RequestBodyTimeoutLayer::new(limits.read_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
