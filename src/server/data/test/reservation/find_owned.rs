use super::*;

/// Tests finding an owned reservation by PNR.
///
/// Expected: Ok(Some) with the owner's display name embedded
#[tokio::test]
async fn finds_owned_reservation() -> Result<(), DbErr> {
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
    let stored = factory::reservation::ReservationFactory::new(db, user.id)
        .accommodation("mountain")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo.find_owned(&stored.pnr, user.id).await?.unwrap();

    assert_eq!(reservation.pnr, stored.pnr);
    assert_eq!(reservation.accommodation, Accommodation::Mountain);
    assert_eq!(reservation.owner_name, "John Doe");
    assert_eq!(reservation.check_in_date, stored.check_in_date);

    Ok(())
}

/// Tests looking up another user's reservation.
///
/// Expected: Ok(None), the same as an unknown PNR
#[tokio::test]
async fn hides_reservation_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = factory::helpers::create_reservation_with_owner(db).await?;
    let other = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.find_owned(&stored.pnr, other.id).await?.is_none());
    assert!(repo.find_owned("Zz9Zz9Zz", other.id).await?.is_none());

    Ok(())
}
