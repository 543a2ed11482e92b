use super::*;

fn changes() -> ReservationChanges {
    ReservationChanges {
        destination: "Bodrum".to_string(),
        accommodation: Accommodation::Beach,
        check_in_date: date(2032, 8, 1),
        check_out_date: date(2032, 8, 4),
        guest_count: 4,
    }
}

/// Tests updating an owned reservation that the guard accepts.
///
/// Expected: Ok(Updated) with every mutable field overwritten
#[tokio::test]
async fn updates_owned_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, stored) = factory::helpers::create_reservation_with_owner(db).await?;

    let repo = ReservationRepository::new(db);
    let outcome = repo
        .update_owned(&stored.pnr, user.id, changes(), |_| Ok::<(), ()>(()))
        .await?;

    assert_eq!(outcome, UpdateOutcome::Updated);

    let row = entity::prelude::Reservation::find_by_id(stored.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.destination, "Bodrum");
    assert_eq!(row.accommodation, "beach");
    assert_eq!(row.check_in_date, date(2032, 8, 1));
    assert_eq!(row.check_out_date, date(2032, 8, 4));
    assert_eq!(row.guest_count, 4);
    assert_eq!(row.pnr, stored.pnr);

    Ok(())
}

/// Tests that the guard sees the stored row and can veto the update.
///
/// Expected: Ok(Rejected) with the row left unchanged
#[tokio::test]
async fn rejected_update_leaves_row_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let yesterday = Utc::now().date_naive() - Duration::days(1);
    let stored = factory::reservation::ReservationFactory::new(db, user.id)
        .check_in_date(yesterday)
        .check_out_date(yesterday + Duration::days(2))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let outcome = repo
        .update_owned(&stored.pnr, user.id, changes(), |row| {
            if row.check_in_date < Utc::now().date_naive() {
                Err("started")
            } else {
                Ok(())
            }
        })
        .await?;

    assert_eq!(outcome, UpdateOutcome::Rejected("started"));

    let row = entity::prelude::Reservation::find_by_id(stored.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.destination, stored.destination);
    assert_eq!(row.check_in_date, stored.check_in_date);
    assert_eq!(row.guest_count, stored.guest_count);

    Ok(())
}

/// Tests updating a reservation owned by someone else.
///
/// Expected: Ok(NotFound) without calling the guard and with the row unchanged
#[tokio::test]
async fn does_not_update_reservation_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = factory::helpers::create_reservation_with_owner(db).await?;
    let intruder = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);
    let outcome = repo
        .update_owned(&stored.pnr, intruder.id, changes(), |_| -> Result<(), ()> {
            panic!("guard must not run for a reservation the user does not own")
        })
        .await?;

    assert_eq!(outcome, UpdateOutcome::NotFound);

    let row = entity::prelude::Reservation::find_by_id(stored.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.destination, stored.destination);
    assert_eq!(row.check_in_date, stored.check_in_date);
    assert_eq!(row.guest_count, stored.guest_count);

    Ok(())
}
