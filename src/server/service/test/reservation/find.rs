use super::*;

/// Tests finding an unknown PNR.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn reports_unknown_pnr() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ReservationService::new(db)
        .find(Principal::new(user.id), "Zz9Zz9Zz")
        .await;

    assert!(matches!(result, Err(ReservationError::NotFound(_))));

    Ok(())
}

/// Tests listing reservations of two users.
///
/// Expected: each user only sees their own reservations
#[tokio::test]
async fn lists_only_own_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, stored) = factory::helpers::create_reservation_with_owner(db).await?;
    let other = factory::create_user(db).await?;

    let service = ReservationService::new(db);
    let owned = service.find_all(Principal::new(owner.id)).await.unwrap();
    let foreign = service.find_all(Principal::new(other.id)).await.unwrap();

    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].pnr, stored.pnr);
    assert!(foreign.is_empty());

    Ok(())
}
