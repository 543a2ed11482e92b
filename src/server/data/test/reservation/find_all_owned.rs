use super::*;

/// Tests listing a user's reservations.
///
/// Verifies that only the user's reservations are returned, ordered by check-in date
/// with ties broken by insertion order.
///
/// Expected: Ok with three reservations in check-in order
#[tokio::test]
async fn lists_owned_reservations_in_check_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let late = factory::reservation::ReservationFactory::new(db, user.id)
        .check_in_date(date(2031, 1, 10))
        .check_out_date(date(2031, 1, 12))
        .build()
        .await?;
    let early = factory::reservation::ReservationFactory::new(db, user.id)
        .check_in_date(date(2030, 6, 1))
        .check_out_date(date(2030, 6, 2))
        .build()
        .await?;
    let early_second = factory::reservation::ReservationFactory::new(db, user.id)
        .check_in_date(date(2030, 6, 1))
        .check_out_date(date(2030, 6, 5))
        .build()
        .await?;
    factory::create_reservation(db, other.id).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.find_all_owned(user.id).await?;

    let pnrs: Vec<_> = reservations.iter().map(|r| r.pnr.as_str()).collect();
    assert_eq!(pnrs, [early.pnr.as_str(), early_second.pnr.as_str(), late.pnr.as_str()]);

    Ok(())
}

/// Tests listing for a user without reservations.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.find_all_owned(user.id).await?.is_empty());

    Ok(())
}
