//! Reservation domain models and parameters.
//!
//! A reservation belongs to the user who created it and is identified towards clients
//! by its PNR. Parameter types split the flow in two: `*Params` carry validated client
//! input into the service, `NewReservation` and `ReservationChanges` carry what the
//! service decided to write into the repository.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::reservation::ReservationDto,
    server::{error::reservation::ReservationError, model::user::User, service::rules},
};

/// Kind of stay booked by a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accommodation {
    Beach,
    City,
    Mountain,
}

impl Accommodation {
    pub const ALL: [Accommodation; 3] = [Self::Beach, Self::City, Self::Mountain];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::City => "city",
            Self::Mountain => "mountain",
        }
    }
}

/// Parses the lowercase wire form. Matching is case-sensitive.
impl FromStr for Accommodation {
    type Err = ReservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|accommodation| accommodation.as_str() == s)
            .ok_or_else(|| ReservationError::InvalidAccommodation(s.to_string()))
    }
}

impl fmt::Display for Accommodation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation together with its owner's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub pnr: String,
    pub destination: String,
    pub accommodation: Accommodation,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_count: i32,
    /// First and last name of the owner
    pub owner_name: String,
}

impl Reservation {
    /// Converts a reservation row and its owner row into the domain model.
    ///
    /// # Arguments
    /// - `entity` - Reservation row
    /// - `owner` - User row the reservation belongs to, `None` if the join found nothing
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The converted domain model
    /// - `Err(DbErr::RecordNotFound)` - Owner row is missing
    /// - `Err(DbErr::Custom)` - Stored accommodation is not a known kind
    pub fn from_entity(
        entity: entity::reservation::Model,
        owner: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        let owner = owner.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Owner {} of reservation {} not found",
                entity.user_id, entity.pnr
            ))
        })?;

        let accommodation = entity
            .accommodation
            .parse::<Accommodation>()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        Ok(Self {
            pnr: entity.pnr,
            destination: entity.destination,
            accommodation,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            guest_count: entity.guest_count,
            owner_name: User::from_entity(owner).display_name(),
        })
    }

    /// Converts the reservation into the view returned to its owner.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            pnr: self.pnr,
            destination: self.destination,
            check_in_date: rules::format_date(self.check_in_date),
            check_out_date: rules::format_date(self.check_out_date),
            accommodation: self.accommodation.to_string(),
            guest_count: self.guest_count,
            user_name: self.owner_name,
        }
    }
}

/// Validated input for creating a reservation.
///
/// Dates and accommodation are still raw strings; interpreting them is a business rule.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub destination: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub accommodation: String,
    pub guest_count: i32,
}

/// Validated input for changing an owned reservation.
#[derive(Debug, Clone)]
pub struct UpdateReservationParams {
    pub pnr: String,
    pub destination: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub accommodation: String,
    pub guest_count: i32,
}

/// Row written for a newly created reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub pnr: String,
    pub user_id: i32,
    pub destination: String,
    pub accommodation: Accommodation,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Fields overwritten when an owned reservation is updated.
#[derive(Debug, Clone)]
pub struct ReservationChanges {
    pub destination: String,
    pub accommodation: Accommodation,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_count: i32,
}
