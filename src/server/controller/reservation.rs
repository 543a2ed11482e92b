use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::HeaderMap,
    response::Response,
};

use crate::{
    model::{
        api::ApiResultDto,
        reservation::{
            CreateReservationBody, CreateReservationDto, ReservationDto, ReservationListDto,
            UpdateReservationBody, UpdateReservationDto,
        },
    },
    server::{
        error::{
            request::{DecodeError, ValidationError},
            AppError,
        },
        middleware::auth::{AuthGuard, TOKEN_HEADER},
        model::reservation::{CreateReservationParams, UpdateReservationParams},
        pipeline::{self, request, FromWire, Guarded, Responder, Validate, WireRequest},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

const CREATE_RESERVATION: &str = "CreateReservation";
const UPDATE_RESERVATION: &str = "UpdateReservation";
const FIND_RESERVATION: &str = "FindReservation";
const FIND_RESERVATIONS: &str = "FindReservations";

const MAX_DESTINATION_LENGTH: usize = 255;

pub struct CreateReservationRequest {
    token: Option<String>,
    body: CreateReservationBody,
}

impl FromWire for CreateReservationRequest {
    fn from_wire(wire: &WireRequest<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            token: wire.header(TOKEN_HEADER)?,
            body: wire.json()?,
        })
    }
}

impl Validate for CreateReservationRequest {
    type Valid = Guarded<CreateReservationParams>;

    fn validate(self) -> Result<Self::Valid, ValidationError> {
        let body = self.body;

        let destination = request::required("destination", body.destination)?;
        request::max_len("destination", &destination, MAX_DESTINATION_LENGTH)?;
        let check_in_date = request::required("checkInDate", body.check_in_date)?;
        let check_out_date = request::required("checkOutDate", body.check_out_date)?;
        let accommodation = request::required("accommodation", body.accommodation)?;
        let guest_count = request::required_count("guestCount", body.guest_count)?;
        request::min("guestCount", guest_count, 1)?;

        Ok(Guarded {
            token: self.token,
            params: CreateReservationParams {
                destination,
                check_in_date,
                check_out_date,
                accommodation,
                guest_count,
            },
        })
    }
}

pub struct UpdateReservationRequest {
    token: Option<String>,
    body: UpdateReservationBody,
}

impl FromWire for UpdateReservationRequest {
    fn from_wire(wire: &WireRequest<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            token: wire.header(TOKEN_HEADER)?,
            body: wire.json()?,
        })
    }
}

impl Validate for UpdateReservationRequest {
    type Valid = Guarded<UpdateReservationParams>;

    fn validate(self) -> Result<Self::Valid, ValidationError> {
        let body = self.body;

        let pnr = request::required("pnr", body.pnr)?;
        let destination = request::required("destination", body.destination)?;
        request::max_len("destination", &destination, MAX_DESTINATION_LENGTH)?;
        let check_in_date = request::required("checkInDate", body.check_in_date)?;
        let check_out_date = request::required("checkOutDate", body.check_out_date)?;
        let accommodation = request::required("accommodation", body.accommodation)?;
        let guest_count = request::required_count("guestCount", body.guest_count)?;
        request::min("guestCount", guest_count, 1)?;

        Ok(Guarded {
            token: self.token,
            params: UpdateReservationParams {
                pnr,
                destination,
                check_in_date,
                check_out_date,
                accommodation,
                guest_count,
            },
        })
    }
}

pub struct FindReservationRequest {
    token: Option<String>,
    pnr: Option<String>,
}

impl FromWire for FindReservationRequest {
    fn from_wire(wire: &WireRequest<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            token: wire.header(TOKEN_HEADER)?,
            pnr: wire.query("pnr"),
        })
    }
}

impl Validate for FindReservationRequest {
    type Valid = Guarded<String>;

    fn validate(self) -> Result<Self::Valid, ValidationError> {
        let pnr = request::required("pnr", self.pnr)?;

        Ok(Guarded {
            token: self.token,
            params: pnr,
        })
    }
}

pub struct FindReservationsRequest {
    token: Option<String>,
}

impl FromWire for FindReservationsRequest {
    fn from_wire(wire: &WireRequest<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            token: wire.header(TOKEN_HEADER)?,
        })
    }
}

impl Validate for FindReservationsRequest {
    type Valid = Guarded<()>;

    fn validate(self) -> Result<Self::Valid, ValidationError> {
        Ok(Guarded {
            token: self.token,
            params: (),
        })
    }
}

/// Create a reservation for the signed-in user.
///
/// # Access Control
/// - Requires a valid access token in the `token` header
///
/// # Returns
/// - `200 OK` - Reservation created, PNR returned
/// - `400 Bad Request` - Malformed body, validation failure, invalid accommodation,
///   unparseable or reversed dates, or the row could not be stored
/// - `401 Unauthorized` - Token missing, invalid or expired
#[utoipa::path(
    post,
    path = "/v1/reservation/new",
    tag = RESERVATION_TAG,
    request_body = CreateReservationBody,
    responses(
        (status = 200, description = "Reservation created; wrapped in the data envelope", body = CreateReservationDto),
        (status = 400, description = "Invalid reservation request", body = ApiResultDto),
        (status = 401, description = "Token missing, invalid or expired", body = ApiResultDto),
        (status = 500, description = "Internal server error", body = ApiResultDto)
    ),
    security(("token" = [])),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let responder = Responder::new(CREATE_RESERVATION, &state.catalog, &headers);

    let outcome: Result<CreateReservationDto, AppError> = async {
        let request = pipeline::decode::<CreateReservationRequest>(&WireRequest::new(
            &headers, None, &body,
        ))?;
        let principal = AuthGuard::new(&state.tokens).authenticate(request.token.as_deref())?;

        let pnr = ReservationService::new(&state.db)
            .create(principal, request.params)
            .await?;

        Ok(CreateReservationDto {
            is_successfully: true,
            pnr,
        })
    }
    .await;

    responder.respond(outcome)
}

/// Change an owned reservation whose stay has not started.
///
/// # Access Control
/// - Requires a valid access token in the `token` header
/// - Only the owner can change a reservation; other PNRs are reported as not found
///
/// # Returns
/// - `200 OK` - Reservation updated
/// - `400 Bad Request` - Invalid request, reservation not found, stay already started or
///   reversed dates
/// - `401 Unauthorized` - Token missing, invalid or expired
#[utoipa::path(
    post,
    path = "/v1/reservation/update",
    tag = RESERVATION_TAG,
    request_body = UpdateReservationBody,
    responses(
        (status = 200, description = "Reservation updated; wrapped in the data envelope", body = UpdateReservationDto),
        (status = 400, description = "Invalid request or reservation cannot be changed", body = ApiResultDto),
        (status = 401, description = "Token missing, invalid or expired", body = ApiResultDto),
        (status = 500, description = "Internal server error", body = ApiResultDto)
    ),
    security(("token" = [])),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let responder = Responder::new(UPDATE_RESERVATION, &state.catalog, &headers);

    let outcome: Result<UpdateReservationDto, AppError> = async {
        let request = pipeline::decode::<UpdateReservationRequest>(&WireRequest::new(
            &headers, None, &body,
        ))?;
        let principal = AuthGuard::new(&state.tokens).authenticate(request.token.as_deref())?;

        ReservationService::new(&state.db)
            .update(principal, request.params)
            .await?;

        Ok(UpdateReservationDto {
            is_successfully: true,
        })
    }
    .await;

    responder.respond(outcome)
}

/// Get an owned reservation by PNR.
///
/// # Access Control
/// - Requires a valid access token in the `token` header
#[utoipa::path(
    get,
    path = "/v1/reservation",
    tag = RESERVATION_TAG,
    params(
        ("pnr" = String, Query, description = "Reservation code")
    ),
    responses(
        (status = 200, description = "Reservation; wrapped in the data envelope", body = ReservationDto),
        (status = 400, description = "Invalid PNR or reservation not found", body = ApiResultDto),
        (status = 401, description = "Token missing, invalid or expired", body = ApiResultDto),
        (status = 500, description = "Internal server error", body = ApiResultDto)
    ),
    security(("token" = [])),
)]
pub async fn find_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let responder = Responder::new(FIND_RESERVATION, &state.catalog, &headers);

    let outcome: Result<ReservationDto, AppError> = async {
        let request = pipeline::decode::<FindReservationRequest>(&WireRequest::new(
            &headers,
            query.as_deref(),
            &[],
        ))?;
        let principal = AuthGuard::new(&state.tokens).authenticate(request.token.as_deref())?;

        let reservation = ReservationService::new(&state.db)
            .find(principal, &request.params)
            .await?;

        Ok(reservation.into_dto())
    }
    .await;

    responder.respond(outcome)
}

/// List every reservation of the signed-in user.
///
/// Reservations are ordered by check-in date. A user without reservations gets an empty
/// list.
///
/// # Access Control
/// - Requires a valid access token in the `token` header
#[utoipa::path(
    get,
    path = "/v1/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Reservations of the user; wrapped in the data envelope", body = ReservationListDto),
        (status = 400, description = "Reservations could not be read", body = ApiResultDto),
        (status = 401, description = "Token missing, invalid or expired", body = ApiResultDto),
        (status = 500, description = "Internal server error", body = ApiResultDto)
    ),
    security(("token" = [])),
)]
pub async fn find_reservations(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let responder = Responder::new(FIND_RESERVATIONS, &state.catalog, &headers);

    let outcome: Result<ReservationListDto, AppError> = async {
        let request =
            pipeline::decode::<FindReservationsRequest>(&WireRequest::new(&headers, None, &[]))?;
        let principal = AuthGuard::new(&state.tokens).authenticate(request.token.as_deref())?;

        let reservations = ReservationService::new(&state.db)
            .find_all(principal)
            .await?;

        Ok(ReservationListDto {
            reservations: reservations.into_iter().map(|r| r.into_dto()).collect(),
            is_successfully: true,
        })
    }
    .await;

    responder.respond(outcome)
}
