//! Reservation factory for creating test reservation entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Defaults place the stay in the future so the reservation is still mutable.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db, user.id)
///     .pnr("ABCD1234")
///     .check_in_date(past_date)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    pnr: String,
    destination: String,
    accommodation: String,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    guest_count: i32,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - pnr: 8 characters derived from an auto-incremented id
    /// - destination: `"Istanbul"`, accommodation: `"city"`
    /// - check-in 30 days from today, check-out 33 days from today
    /// - guest_count: `2`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the owning user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            user_id,
            pnr: format!("T{:07}", next_id()),
            destination: "Istanbul".to_string(),
            accommodation: "city".to_string(),
            check_in_date: today + Duration::days(30),
            check_out_date: today + Duration::days(33),
            guest_count: 2,
        }
    }

    pub fn pnr(mut self, pnr: impl Into<String>) -> Self {
        self.pnr = pnr.into();
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn accommodation(mut self, accommodation: impl Into<String>) -> Self {
        self.accommodation = accommodation.into();
        self
    }

    pub fn check_in_date(mut self, check_in_date: NaiveDate) -> Self {
        self.check_in_date = check_in_date;
        self
    }

    pub fn check_out_date(mut self, check_out_date: NaiveDate) -> Self {
        self.check_out_date = check_out_date;
        self
    }

    pub fn guest_count(mut self, guest_count: i32) -> Self {
        self.guest_count = guest_count;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            pnr: ActiveValue::Set(self.pnr),
            destination: ActiveValue::Set(self.destination),
            accommodation: ActiveValue::Set(self.accommodation),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            guest_count: ActiveValue::Set(self.guest_count),
            created_at: ActiveValue::Set(Utc::now()),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values for the given owner.
pub async fn create_reservation(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, user_id).build().await
}
