//! Reservation business rules.
//!
//! Pure functions over parsed values so that every rule can be checked without a
//! database. Services combine them in the order each operation requires.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rand::Rng;

use crate::server::error::reservation::ReservationError;

/// Wire format of reservation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const PNR_LENGTH: usize = 8;

const PNR_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Parses a `YYYY-MM-DD` date with zero-padded month and day.
///
/// # Arguments
/// - `field` - Wire name of the field, reported back on failure
/// - `value` - Raw date string
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed calendar date
/// - `Err(ReservationError::DateParse)` - Not a valid date in the expected form
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ReservationError> {
    let parse_error = || ReservationError::DateParse {
        field,
        value: value.to_string(),
    };

    if value.len() != 10 {
        return Err(parse_error());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| parse_error())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Proposed check-in and check-out dates of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayDates {
    /// Parses both dates, check-in first. Ordering is not checked here.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, ReservationError> {
        Ok(Self {
            check_in: parse_date("checkInDate", check_in)?,
            check_out: parse_date("checkOutDate", check_out)?,
        })
    }

    /// Requires check-in on or before check-out.
    pub fn ensure_ordered(&self) -> Result<(), ReservationError> {
        if self.check_in > self.check_out {
            return Err(ReservationError::CheckInAfterCheckout {
                check_in: self.check_in,
                check_out: self.check_out,
            });
        }

        Ok(())
    }
}

/// Requires that the stored check-in date of a reservation has not started yet.
///
/// A stay starts at midnight UTC of its check-in date; from then on the reservation
/// can no longer be changed.
pub fn ensure_check_in_not_passed(
    pnr: &str,
    stored_check_in: NaiveDate,
    now: DateTime<Utc>,
) -> Result<(), ReservationError> {
    let starts_at = stored_check_in.and_time(NaiveTime::MIN).and_utc();

    if now > starts_at {
        return Err(ReservationError::CheckInDatePassed {
            pnr: pnr.to_string(),
            check_in: stored_check_in,
        });
    }

    Ok(())
}

/// Generates a PNR by sampling the alphanumeric alphabet uniformly.
pub fn generate_pnr<R: Rng>(rng: &mut R) -> String {
    (0..PNR_LENGTH)
        .map(|_| PNR_ALPHABET[rng.random_range(0..PNR_ALPHABET.len())] as char)
        .collect()
}
