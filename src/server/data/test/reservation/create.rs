use super::*;

fn new_reservation(user_id: i32, pnr: &str) -> NewReservation {
    NewReservation {
        pnr: pnr.to_string(),
        user_id,
        destination: "Antalya".to_string(),
        accommodation: Accommodation::Beach,
        check_in_date: date(2030, 7, 1),
        check_out_date: date(2030, 7, 8),
        guest_count: 3,
        created_at: Utc::now(),
    }
}

/// Tests creating a reservation for a user.
///
/// Verifies that every field is stored and that the row starts out active and not
/// deleted.
///
/// Expected: Ok with the stored row
#[tokio::test]
async fn creates_active_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);
    let stored = repo.create(new_reservation(user.id, "Ab3dE6gH")).await?;

    assert_eq!(stored.pnr, "Ab3dE6gH");
    assert_eq!(stored.user_id, user.id);
    assert_eq!(stored.destination, "Antalya");
    assert_eq!(stored.accommodation, "beach");
    assert_eq!(stored.check_in_date, date(2030, 7, 1));
    assert_eq!(stored.check_out_date, date(2030, 7, 8));
    assert_eq!(stored.guest_count, 3);
    assert!(stored.is_active);
    assert!(!stored.is_deleted);

    let rows = entity::prelude::Reservation::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests creating a reservation whose PNR is already taken.
///
/// Expected: Err from the unique index, with a single row left in the table
#[tokio::test]
async fn fails_on_duplicate_pnr() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);
    repo.create(new_reservation(user.id, "Ab3dE6gH")).await?;
    let result = repo.create(new_reservation(user.id, "Ab3dE6gH")).await;

    assert!(result.is_err());
    let rows = entity::prelude::Reservation::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
