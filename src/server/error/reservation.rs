use chrono::NaiveDate;
use sea_orm::DbErr;
use thiserror::Error;

/// Business rule failures of the reservation operations.
#[derive(Error, Debug)]
pub enum ReservationError {
    /// Accommodation is not one of `beach`, `city` or `mountain`.
    #[error("Accommodation '{0}' is not one of beach, city, mountain")]
    InvalidAccommodation(String),

    /// A date field is not a calendar date in `YYYY-MM-DD` form.
    #[error("Failed to parse {field} '{value}' as a YYYY-MM-DD date")]
    DateParse {
        /// Wire name of the field holding the date
        field: &'static str,
        /// Raw value supplied by the client
        value: String,
    },

    /// Proposed check-in date is later than the proposed check-out date.
    #[error("Check-in date {check_in} is after check-out date {check_out}")]
    CheckInAfterCheckout {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// The stored check-in date of the reservation has already started.
    #[error("Check-in date {check_in} of reservation {pnr} has already passed")]
    CheckInDatePassed { pnr: String, check_in: NaiveDate },

    /// No reservation with the PNR exists for the requesting user.
    #[error("Reservation {0} not found for the requesting user")]
    NotFound(String),

    /// The new reservation row could not be written.
    #[error("Failed to store new reservation: {0}")]
    CouldNotCreate(#[source] DbErr),

    #[error(transparent)]
    Database(#[from] DbErr),
}
