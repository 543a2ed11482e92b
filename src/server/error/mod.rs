//! Error types and client-facing error mapping.
//!
//! `AppError` is the top-level error that every request stage and startup step returns.
//! Converting it into an [`ApiError`] classifies the failure into one of the fixed API
//! error kinds, chooses the message key for the client and keeps the original error as
//! the cause for the server log.

pub mod account;
pub mod api;
pub mod auth;
pub mod config;
pub mod localization;
pub mod request;
pub mod reservation;

use thiserror::Error;

use crate::server::{
    error::{
        account::AccountError,
        api::{ApiError, ApiErrorKind},
        auth::AuthError,
        config::ConfigError,
        localization::LocalizationError,
        request::{DecodeError, ValidationError},
        reservation::ReservationError,
    },
    pipeline::Stage,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Language files could not be loaded at startup.
    #[error(transparent)]
    LocalizationErr(#[from] LocalizationError),

    /// Request parts could not be decoded into the endpoint's request type.
    ///
    /// Results in 400 Bad Request with the malformed request message.
    #[error(transparent)]
    DecodeErr(#[from] DecodeError),

    /// Decoded request violates a field constraint.
    ///
    /// Results in 400 Bad Request naming the field and constraint.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Token missing, invalid or expired.
    ///
    /// Results in 401 Unauthorized, except for signing failures which are internal.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    AccountErr(#[from] AccountError),

    #[error(transparent)]
    ReservationErr(#[from] ReservationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or file error, only raised outside of request handling.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The message is logged but a generic
    /// message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Request pipeline stage that produces this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::DecodeErr(_) => Stage::Decode,
            Self::ValidationErr(_) => Stage::Validate,
            Self::AuthErr(AuthError::Signing(_)) => Stage::Execute,
            Self::AuthErr(_) => Stage::Authenticate,
            _ => Stage::Execute,
        }
    }
}

/// Classifies an application error into the API error returned to the client.
///
/// Failures that cannot be classified become internal server errors. The application
/// error is kept as the cause so the log shows what actually went wrong.
impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let api_error = match &err {
            AppError::DecodeErr(_) => ApiError::new(ApiErrorKind::BadRequest)
                .with_message(api::MALFORMED_REQUEST_KEY, "The request could not be read."),
            AppError::ValidationErr(validation) => ApiError::new(ApiErrorKind::Validation)
                .with_arg("field", validation.field)
                .with_arg("constraint", validation.constraint.clone()),
            AppError::AuthErr(AuthError::Signing(_)) => ApiError::new(ApiErrorKind::InternalServer),
            AppError::AuthErr(_) => ApiError::new(ApiErrorKind::Unauthorized),
            AppError::AccountErr(account) => match account {
                AccountError::InvalidCredentials(_) => ApiError::new(ApiErrorKind::BadRequest)
                    .with_message(
                        api::INVALID_CREDENTIALS_KEY,
                        "User name or password is incorrect.",
                    ),
                AccountError::Token(_) => ApiError::new(ApiErrorKind::InternalServer),
                AccountError::Database(_) => ApiError::new(ApiErrorKind::BadRequest),
            },
            AppError::ReservationErr(reservation) => match reservation {
                ReservationError::InvalidAccommodation(_) => {
                    ApiError::new(ApiErrorKind::InvalidAccommodation)
                }
                ReservationError::DateParse { field, .. } => {
                    ApiError::new(ApiErrorKind::DateParse).with_arg("field", *field)
                }
                ReservationError::CheckInAfterCheckout { .. } => {
                    ApiError::new(ApiErrorKind::CheckInAfterCheckout)
                }
                ReservationError::CheckInDatePassed { .. } => {
                    ApiError::new(ApiErrorKind::CouldNotChangeReservationCheckInDate)
                }
                ReservationError::NotFound(_) => ApiError::new(ApiErrorKind::BadRequest)
                    .with_message(api::RESERVATION_NOT_FOUND_KEY, "Reservation not found."),
                ReservationError::CouldNotCreate(_) => {
                    ApiError::new(ApiErrorKind::CouldNotCreateReservation)
                }
                ReservationError::Database(_) => ApiError::new(ApiErrorKind::BadRequest),
            },
            AppError::ConfigErr(_)
            | AppError::LocalizationErr(_)
            | AppError::DbErr(_)
            | AppError::IoErr(_)
            | AppError::InternalError(_) => ApiError::new(ApiErrorKind::InternalServer),
        };

        api_error.with_cause(err)
    }
}
