//! Reservation data repository.
//!
//! Every lookup and write is scoped to the owning user, so a reservation of another user
//! behaves exactly like an unknown PNR. Updates run as one transaction that re-reads the
//! row and lets the caller veto the write before anything is changed.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::reservation::{NewReservation, Reservation, ReservationChanges};

/// Result of a guarded update.
#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome<E> {
    /// The changes were written and committed.
    Updated,
    /// No reservation with the PNR belongs to the user.
    NotFound,
    /// The guard refused the change; nothing was written.
    Rejected(E),
}

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active reservation.
    ///
    /// Fails when the PNR is already taken, as the column carries a unique index.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - The stored row
    /// - `Err(DbErr)` - Insert failed
    pub async fn create(
        &self,
        reservation: NewReservation,
    ) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(reservation.user_id),
            pnr: ActiveValue::Set(reservation.pnr),
            destination: ActiveValue::Set(reservation.destination),
            accommodation: ActiveValue::Set(reservation.accommodation.as_str().to_string()),
            check_in_date: ActiveValue::Set(reservation.check_in_date),
            check_out_date: ActiveValue::Set(reservation.check_out_date),
            guest_count: ActiveValue::Set(reservation.guest_count),
            created_at: ActiveValue::Set(reservation.created_at),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a reservation by PNR among the reservations of one user.
    ///
    /// # Arguments
    /// - `pnr` - Public reservation code
    /// - `user_id` - Id of the requesting user
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Reservation with its owner's name
    /// - `Ok(None)` - No reservation with the PNR belongs to the user
    /// - `Err(DbErr)` - Database error during query or conversion
    pub async fn find_owned(&self, pnr: &str, user_id: i32) -> Result<Option<Reservation>, DbErr> {
        let result = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Pnr.eq(pnr))
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        result
            .map(|(reservation, owner)| Reservation::from_entity(reservation, owner))
            .transpose()
    }

    /// Gets every reservation of one user, ordered by check-in date then id.
    pub async fn find_all_owned(&self, user_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let results = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_asc(entity::reservation::Column::CheckInDate)
            .order_by_asc(entity::reservation::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        results
            .into_iter()
            .map(|(reservation, owner)| Reservation::from_entity(reservation, owner))
            .collect()
    }

    /// Overwrites the mutable fields of an owned reservation inside one transaction.
    ///
    /// The stored row is loaded within the transaction and handed to `guard`; a rejection
    /// rolls the transaction back without writing. Database errors after the transaction
    /// started also roll it back, as the transaction is dropped uncommitted.
    ///
    /// # Arguments
    /// - `pnr` - Public reservation code
    /// - `user_id` - Id of the requesting user
    /// - `changes` - Values to write
    /// - `guard` - Check run against the stored row before writing
    ///
    /// # Returns
    /// - `Ok(UpdateOutcome::Updated)` - Changes committed
    /// - `Ok(UpdateOutcome::NotFound)` - No reservation with the PNR belongs to the user
    /// - `Ok(UpdateOutcome::Rejected(E))` - Guard refused the change
    /// - `Err(DbErr)` - Database error; nothing was committed
    pub async fn update_owned<E, F>(
        &self,
        pnr: &str,
        user_id: i32,
        changes: ReservationChanges,
        guard: F,
    ) -> Result<UpdateOutcome<E>, DbErr>
    where
        F: FnOnce(&entity::reservation::Model) -> Result<(), E>,
    {
        let txn = self.db.begin().await?;

        let Some(stored) = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Pnr.eq(pnr))
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(UpdateOutcome::NotFound);
        };

        if let Err(rejection) = guard(&stored) {
            txn.rollback().await?;
            return Ok(UpdateOutcome::Rejected(rejection));
        }

        let mut reservation: entity::reservation::ActiveModel = stored.into();
        reservation.destination = ActiveValue::Set(changes.destination);
        reservation.accommodation = ActiveValue::Set(changes.accommodation.as_str().to_string());
        reservation.check_in_date = ActiveValue::Set(changes.check_in_date);
        reservation.check_out_date = ActiveValue::Set(changes.check_out_date);
        reservation.guest_count = ActiveValue::Set(changes.guest_count);
        reservation.update(&txn).await?;

        txn.commit().await?;

        Ok(UpdateOutcome::Updated)
    }
}
