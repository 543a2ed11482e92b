use super::*;

/// Tests updating an owned reservation whose stay is in the future.
///
/// Expected: Ok with the new values stored
#[tokio::test]
async fn updates_future_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, stored) = factory::helpers::create_reservation_with_owner(db).await?;
    let principal = Principal::new(user.id);

    let service = ReservationService::new(db);
    service
        .update(principal, update_params(&stored.pnr, "2031-02-10", "2031-02-10"))
        .await
        .unwrap();

    let reservation = service.find(principal, &stored.pnr).await.unwrap();
    assert_eq!(reservation.destination, "Bodrum");
    assert_eq!(reservation.accommodation, Accommodation::Mountain);
    assert_eq!(reservation.check_in_date, date(2031, 2, 10));
    assert_eq!(reservation.check_out_date, date(2031, 2, 10));
    assert_eq!(reservation.guest_count, 5);

    Ok(())
}

/// Tests updating a reservation whose stored check-in date has passed.
///
/// Verifies that the refusal happens even when the proposed dates are valid and in the
/// future.
///
/// Expected: Err(CheckInDatePassed) with the row unchanged
#[tokio::test]
async fn refuses_started_reservation() -> Result<(), DbErr> {
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
        .check_out_date(yesterday + Duration::days(3))
        .build()
        .await?;

    let service = ReservationService::new(db);
    let result = service
        .update(
            Principal::new(user.id),
            update_params(&stored.pnr, "2031-02-10", "2031-02-12"),
        )
        .await;

    assert!(matches!(result, Err(ReservationError::CheckInDatePassed { .. })));

    let row = entity::prelude::Reservation::find_by_id(stored.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.destination, stored.destination);
    assert_eq!(row.check_in_date, yesterday);

    Ok(())
}

/// Tests updating with reversed dates.
///
/// Expected: Err(CheckInAfterCheckout) with the row unchanged
#[tokio::test]
async fn refuses_reversed_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, stored) = factory::helpers::create_reservation_with_owner(db).await?;

    let service = ReservationService::new(db);
    let result = service
        .update(
            Principal::new(user.id),
            update_params(&stored.pnr, "2031-02-12", "2031-02-10"),
        )
        .await;

    assert!(matches!(result, Err(ReservationError::CheckInAfterCheckout { .. })));

    let row = entity::prelude::Reservation::find_by_id(stored.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.destination, stored.destination);
    assert_eq!(row.check_in_date, stored.check_in_date);

    Ok(())
}

/// Tests updating another user's reservation.
///
/// Expected: Err(NotFound) with the row unchanged
#[tokio::test]
async fn refuses_reservation_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = factory::helpers::create_reservation_with_owner(db).await?;
    let intruder = factory::create_user(db).await?;

    let result = ReservationService::new(db)
        .update(
            Principal::new(intruder.id),
            update_params(&stored.pnr, "2031-02-10", "2031-02-12"),
        )
        .await;

    assert!(matches!(result, Err(ReservationError::NotFound(pnr)) if pnr == stored.pnr));

    let row = entity::prelude::Reservation::find_by_id(stored.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.destination, stored.destination);
    assert_eq!(row.guest_count, stored.guest_count);

    Ok(())
}

/// Tests that an invalid accommodation is reported before the reservation is looked up.
///
/// Expected: Err(InvalidAccommodation) even for an unknown PNR
#[tokio::test]
async fn checks_accommodation_before_lookup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let mut params = update_params("Zz9Zz9Zz", "2031-02-10", "2031-02-12");
    params.accommodation = "Beach".to_string();

    let result = ReservationService::new(db)
        .update(Principal::new(user.id), params)
        .await;

    assert!(matches!(result, Err(ReservationError::InvalidAccommodation(_))));

    Ok(())
}
