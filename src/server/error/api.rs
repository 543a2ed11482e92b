//! Client-facing API errors.
//!
//! Every failure leaving the server is an [`ApiError`]: one of a fixed set of kinds, each
//! with a stable name, numeric code and HTTP status, plus a message that is localized to
//! the client's language right before the response is written.

use std::fmt;

use axum::http::StatusCode;

use crate::{model::api::ApiResultDto, server::localization::Translator};

pub const INTERNAL_SERVER_ERROR_KEY: &str = "default-internal-server-error-message";
pub const BAD_REQUEST_KEY: &str = "default-bad-request-error-message";
pub const MALFORMED_REQUEST_KEY: &str = "malformed-request-error-message";
pub const RESERVATION_NOT_FOUND_KEY: &str = "reservation-not-found-error-message";
pub const INVALID_CREDENTIALS_KEY: &str = "invalid-credentials-error-message";
pub const VALIDATION_KEY: &str = "validation-error-message";
pub const UNAUTHORIZED_KEY: &str = "default-unauthorized-error-message";
pub const COULD_NOT_CREATE_RESERVATION_KEY: &str = "could-not-create-reservation";
pub const COULD_NOT_CHANGE_CHECK_IN_DATE_KEY: &str = "could-not-change-reservation-check-in-date";
pub const CHECK_IN_AFTER_CHECKOUT_KEY: &str = "check-in-after-checkout";
pub const INVALID_ACCOMMODATION_KEY: &str = "invalid-accommodation";
pub const DATE_PARSE_KEY: &str = "date-parse-error";

/// Kind of an API error, fixing its name, code and HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    InternalServer,
    BadRequest,
    Validation,
    Unauthorized,
    CouldNotCreateReservation,
    CouldNotChangeReservationCheckInDate,
    CheckInAfterCheckout,
    InvalidAccommodation,
    DateParse,
}

impl ApiErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::InternalServer => "InternalServerError",
            Self::BadRequest => "BadRequestError",
            Self::Validation => "ValidationError",
            Self::Unauthorized => "UnauthorizedError",
            Self::CouldNotCreateReservation => "CouldNotCreateReservationError",
            Self::CouldNotChangeReservationCheckInDate => {
                "CouldNotChangeReservationCheckInDateError"
            }
            Self::CheckInAfterCheckout => "CheckInAfterCheckoutError",
            Self::InvalidAccommodation => "InvalidAccommodationError",
            Self::DateParse => "DateParseError",
        }
    }

    pub fn code(self) -> u16 {
        match self {
            Self::InternalServer => 1,
            Self::BadRequest => 2,
            Self::Validation => 3,
            Self::Unauthorized => 4,
            Self::CouldNotCreateReservation => 5,
            Self::CouldNotChangeReservationCheckInDate => 6,
            Self::CheckInAfterCheckout => 7,
            Self::InvalidAccommodation => 8,
            Self::DateParse => 9,
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            Self::InternalServer => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Message key and untranslated fallback text used when no override is given.
    fn default_message(self) -> (&'static str, &'static str) {
        match self {
            Self::InternalServer => (
                INTERNAL_SERVER_ERROR_KEY,
                "An unexpected error occurred, please try again later.",
            ),
            Self::BadRequest => (BAD_REQUEST_KEY, "The request could not be processed."),
            Self::Validation => (
                VALIDATION_KEY,
                "validation failed, tag: {constraint}, field: {field}",
            ),
            Self::Unauthorized => (
                UNAUTHORIZED_KEY,
                "You are not authorized to perform this action.",
            ),
            Self::CouldNotCreateReservation => (
                COULD_NOT_CREATE_RESERVATION_KEY,
                "Reservation could not be created.",
            ),
            Self::CouldNotChangeReservationCheckInDate => (
                COULD_NOT_CHANGE_CHECK_IN_DATE_KEY,
                "The check-in date of a reservation that has already started cannot be changed.",
            ),
            Self::CheckInAfterCheckout => (
                CHECK_IN_AFTER_CHECKOUT_KEY,
                "Check-in date cannot be later than check-out date.",
            ),
            Self::InvalidAccommodation => (
                INVALID_ACCOMMODATION_KEY,
                "Accommodation must be one of beach, city or mountain.",
            ),
            Self::DateParse => (
                DATE_PARSE_KEY,
                "Field {field} must be a date in YYYY-MM-DD format.",
            ),
        }
    }
}

/// Client-facing error with a localizable message.
///
/// `message` holds the message template until [`ApiError::localize`] swaps it for the
/// client's translation and fills in `args`. The underlying failure is kept as `cause`
/// for the server log and never reaches the client.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub message_key: Option<&'static str>,
    pub args: Vec<(&'static str, String)>,
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind) -> Self {
        let (key, message) = kind.default_message();

        Self {
            kind,
            message: message.to_string(),
            message_key: Some(key),
            args: Vec::new(),
            cause: None,
        }
    }

    /// Replaces the default message key and fallback text.
    pub fn with_message(mut self, key: &'static str, fallback: impl Into<String>) -> Self {
        self.message_key = Some(key);
        self.message = fallback.into();
        self
    }

    /// Adds a value for a `{name}` placeholder in the message.
    pub fn with_arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, value.into()));
        self
    }

    pub fn with_cause(mut self, cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Resolves the message in the translator's languages and fills in placeholders.
    ///
    /// Falls back to the current message text when no language has the key.
    pub fn localize(&mut self, translator: &Translator<'_>) {
        self.message = match self.message_key {
            Some(key) => translator.translate(key, &self.message, &self.args),
            None => Translator::interpolate(&self.message, &self.args),
        };
    }

    pub fn to_dto(&self) -> ApiResultDto {
        ApiResultDto {
            message: self.message.clone(),
            name: self.kind.name().to_string(),
            code: self.kind.code(),
            status_code: self.kind.status().as_u16(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind.name(), self.kind.code(), self.message)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn std::error::Error + 'static))
    }
}
