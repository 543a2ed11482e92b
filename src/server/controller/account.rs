use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};

use crate::{
    model::{
        account::{SignInBody, SignInDto},
        api::ApiResultDto,
    },
    server::{
        error::{
            request::{DecodeError, ValidationError},
            AppError,
        },
        model::account::SignInParams,
        pipeline::{self, request, FromWire, Responder, Validate, WireRequest},
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

const SIGN_IN: &str = "SignIn";

/// Sign-in request as read from the wire.
pub struct SignInRequest {
    body: SignInBody,
}

impl FromWire for SignInRequest {
    fn from_wire(wire: &WireRequest<'_>) -> Result<Self, DecodeError> {
        Ok(Self { body: wire.json()? })
    }
}

impl Validate for SignInRequest {
    type Valid = SignInParams;

    fn validate(self) -> Result<SignInParams, ValidationError> {
        Ok(SignInParams {
            username: request::required("userName", self.body.user_name)?,
            password: request::required("password", self.body.password)?,
        })
    }
}

/// Sign in with username and password.
///
/// Issues an access token valid for 24 hours. Send it in the `token` header of every
/// reservation request.
///
/// # Returns
/// - `200 OK` - Credentials match an active user
/// - `400 Bad Request` - Malformed body, missing fields or invalid credentials
/// - `500 Internal Server Error` - Token could not be signed
#[utoipa::path(
    post,
    path = "/v1/account/sign-in",
    tag = ACCOUNT_TAG,
    request_body = SignInBody,
    responses(
        (status = 200, description = "Signed in; wrapped in the data envelope", body = SignInDto),
        (status = 400, description = "Malformed request, validation failure or invalid credentials", body = ApiResultDto),
        (status = 500, description = "Internal server error", body = ApiResultDto)
    ),
)]
pub async fn sign_in(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let responder = Responder::new(SIGN_IN, &state.catalog, &headers);

    let outcome: Result<SignInDto, AppError> = async {
        let params = pipeline::decode::<SignInRequest>(&WireRequest::new(&headers, None, &body))?;

        let issued = AccountService::new(&state.db, &state.tokens)
            .sign_in(params)
            .await?;

        Ok(SignInDto {
            is_successfully: true,
            token: issued.token,
        })
    }
    .await;

    responder.respond(outcome)
}
