use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::reservation::{ReservationRepository, UpdateOutcome},
    error::reservation::ReservationError,
    model::{
        principal::Principal,
        reservation::{
            Accommodation, CreateReservationParams, NewReservation, Reservation,
            ReservationChanges, UpdateReservationParams,
        },
    },
    service::rules::{self, StayDates},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation owned by `principal` and returns its PNR.
    ///
    /// Checks the accommodation, then the dates and their order, before generating a PNR
    /// and writing the row.
    ///
    /// # Returns
    /// - `Ok(String)` - PNR of the new reservation
    /// - `Err(ReservationError::InvalidAccommodation)` - Unknown accommodation
    /// - `Err(ReservationError::DateParse)` - A date is not `YYYY-MM-DD`
    /// - `Err(ReservationError::CheckInAfterCheckout)` - Dates are reversed
    /// - `Err(ReservationError::CouldNotCreate)` - Row could not be written
    pub async fn create(
        &self,
        principal: Principal,
        params: CreateReservationParams,
    ) -> Result<String, ReservationError> {
        let accommodation: Accommodation = params.accommodation.parse()?;
        let stay = StayDates::parse(&params.check_in_date, &params.check_out_date)?;
        stay.ensure_ordered()?;

        let pnr = rules::generate_pnr(&mut rand::rng());

        let repo = ReservationRepository::new(self.db);
        repo.create(NewReservation {
            pnr: pnr.clone(),
            user_id: principal.user_id(),
            destination: params.destination,
            accommodation,
            check_in_date: stay.check_in,
            check_out_date: stay.check_out,
            guest_count: params.guest_count,
            created_at: Utc::now(),
        })
        .await
        .map_err(|err| {
            tracing::error!(user_id = principal.user_id(), "Failed to store reservation: {}", err);
            ReservationError::CouldNotCreate(err)
        })?;

        tracing::info!(user_id = principal.user_id(), pnr = %pnr, "Reservation created");

        Ok(pnr)
    }

    /// Changes an owned reservation whose stay has not started yet.
    ///
    /// Accommodation and dates are parsed first. The stored row is then checked inside
    /// the update transaction: a started stay is refused before the new dates are
    /// compared, and any refusal leaves the row untouched.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation updated
    /// - `Err(ReservationError::NotFound)` - No reservation with the PNR belongs to the user
    /// - `Err(ReservationError::CheckInDatePassed)` - Stored check-in date has started
    /// - `Err(ReservationError::CheckInAfterCheckout)` - Proposed dates are reversed
    /// - `Err(ReservationError::Database)` - Transaction failed and was rolled back
    pub async fn update(
        &self,
        principal: Principal,
        params: UpdateReservationParams,
    ) -> Result<(), ReservationError> {
        let accommodation: Accommodation = params.accommodation.parse()?;
        let stay = StayDates::parse(&params.check_in_date, &params.check_out_date)?;
        let now = Utc::now();

        let repo = ReservationRepository::new(self.db);
        let outcome = repo
            .update_owned(
                &params.pnr,
                principal.user_id(),
                ReservationChanges {
                    destination: params.destination,
                    accommodation,
                    check_in_date: stay.check_in,
                    check_out_date: stay.check_out,
                    guest_count: params.guest_count,
                },
                |stored| {
                    rules::ensure_check_in_not_passed(&stored.pnr, stored.check_in_date, now)?;
                    stay.ensure_ordered()
                },
            )
            .await?;

        match outcome {
            UpdateOutcome::Updated => {
                tracing::info!(user_id = principal.user_id(), pnr = %params.pnr, "Reservation updated");
                Ok(())
            }
            UpdateOutcome::NotFound => Err(ReservationError::NotFound(params.pnr)),
            UpdateOutcome::Rejected(err) => Err(err),
        }
    }

    /// Gets an owned reservation by PNR.
    pub async fn find(&self, principal: Principal, pnr: &str) -> Result<Reservation, ReservationError> {
        let repo = ReservationRepository::new(self.db);

        repo.find_owned(pnr, principal.user_id())
            .await?
            .ok_or_else(|| ReservationError::NotFound(pnr.to_string()))
    }

    /// Gets every reservation of `principal`, earliest check-in first.
    pub async fn find_all(&self, principal: Principal) -> Result<Vec<Reservation>, ReservationError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.find_all_owned(principal.user_id()).await?)
    }
}
