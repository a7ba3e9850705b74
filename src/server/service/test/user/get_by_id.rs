use super::*;

/// Tests reading an existing user's public profile.
///
/// Expected: Ok(User) with the factory's mail and username
#[tokio::test]
async fn returns_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let service = UserService::new(db);
    let user = service.get_by_id(created.id).await?;

    assert_eq!(user.mail, created.mail);
    assert_eq!(user.username, created.username);

    Ok(())
}

/// Tests reading a user id that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    assert!(matches!(
        service.get_by_id(5).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
