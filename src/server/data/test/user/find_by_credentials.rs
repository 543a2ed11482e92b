use super::*;

/// Tests finding an active user by username and password digest.
///
/// Expected: Ok(Some(User)) with the stored names
#[tokio::test]
async fn finds_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .username("jdoe")
        .first_name("John")
        .last_name("Doe")
        .password(digest_password("secret"))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .find_by_credentials("jdoe", &digest_password("secret"))
        .await?
        .unwrap();

    assert_eq!(user.id, stored.id);
    assert_eq!(user.display_name(), "John Doe");

    Ok(())
}

/// Tests a lookup with the wrong password digest.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("jdoe")
        .password(digest_password("secret"))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .find_by_credentials("jdoe", &digest_password("Secret"))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that inactive and soft-deleted accounts cannot be found.
///
/// Expected: Ok(None) for both accounts despite matching credentials
#[tokio::test]
async fn ignores_inactive_and_deleted_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("inactive")
        .password(digest_password("secret"))
        .is_active(false)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("deleted")
        .password(digest_password("secret"))
        .is_deleted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo
        .find_by_credentials("inactive", &digest_password("secret"))
        .await?
        .is_none());
    assert!(repo
        .find_by_credentials("deleted", &digest_password("secret"))
        .await?
        .is_none());

    Ok(())
}
