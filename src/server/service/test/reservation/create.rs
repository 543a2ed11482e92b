use super::*;

/// Tests creating a reservation and reading it back.
///
/// Verifies that the stored reservation round-trips destination, dates, accommodation,
/// guest count and the owner's display name.
///
/// Expected: Ok with an 8 character alphanumeric PNR
#[tokio::test]
async fn creates_and_finds_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .first_name("John")
        .last_name("Doe")
        .build()
        .await?;
    let principal = Principal::new(user.id);

    let service = ReservationService::new(db);
    let pnr = service
        .create(principal, create_params("beach", "2030-07-01", "2030-07-01"))
        .await
        .unwrap();

    assert_eq!(pnr.len(), 8);
    assert!(pnr.chars().all(|c| c.is_ascii_alphanumeric()));

    let view = service.find(principal, &pnr).await.unwrap().into_dto();
    assert_eq!(view.pnr, pnr);
    assert_eq!(view.destination, "Antalya");
    assert_eq!(view.check_in_date, "2030-07-01");
    assert_eq!(view.check_out_date, "2030-07-01");
    assert_eq!(view.accommodation, "beach");
    assert_eq!(view.guest_count, 2);
    assert_eq!(view.user_name, "John Doe");

    Ok(())
}

/// Tests the rule failures that must stop a reservation from being written.
///
/// Expected: InvalidAccommodation, DateParse and CheckInAfterCheckout, with no rows
#[tokio::test]
async fn rejects_invalid_reservations_without_writing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let principal = Principal::new(user.id);
    let service = ReservationService::new(db);

    let result = service
        .create(principal, create_params("castle", "2030-07-01", "2030-07-02"))
        .await;
    assert!(matches!(result, Err(ReservationError::InvalidAccommodation(_))));

    let result = service
        .create(principal, create_params("city", "2030-07-01", "07/02/2030"))
        .await;
    assert!(matches!(
        result,
        Err(ReservationError::DateParse { field: "checkOutDate", .. })
    ));

    let result = service
        .create(principal, create_params("city", "2030-07-05", "2030-07-02"))
        .await;
    assert!(matches!(result, Err(ReservationError::CheckInAfterCheckout { .. })));

    let rows = entity::prelude::Reservation::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests creating a reservation when the reservation table is missing.
///
/// Expected: Err(CouldNotCreate)
#[tokio::test]
async fn reports_store_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ReservationService::new(db)
        .create(
            Principal::new(user.id),
            create_params("city", "2030-07-01", "2030-07-02"),
        )
        .await;

    assert!(matches!(result, Err(ReservationError::CouldNotCreate(_))));

    Ok(())
}
