//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for usernames and PNRs so factory-created rows never collide on unique columns.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a reservation owned by that user, both with default values.
///
/// # Returns
/// - `Ok((user, reservation))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::reservation::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, user.id).await?;

    Ok((user, reservation))
}
