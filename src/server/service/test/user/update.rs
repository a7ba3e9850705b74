use super::*;

/// Tests changing a username.
///
/// Expected: Ok(User) carrying the new username
#[tokio::test]
async fn updates_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let service = UserService::new(db);
    let user = service
        .update(UpdateUserParams {
            id: created.id,
            username: "kenobi".to_string(),
        })
        .await?;

    assert_eq!(user.username.as_deref(), Some("kenobi"));

    Ok(())
}

/// Tests keeping the current username.
///
/// Verifies that a user's own name does not count as taken.
///
/// Expected: Ok(User) with the unchanged username
#[tokio::test]
async fn allows_keeping_own_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("ahsoka")
        .build()
        .await?;

    let service = UserService::new(db);
    let user = service
        .update(UpdateUserParams {
            id: created.id,
            username: "ahsoka".to_string(),
        })
        .await?;

    assert_eq!(user.username.as_deref(), Some("ahsoka"));

    Ok(())
}

/// Tests taking a username that belongs to another user.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("maul")
        .build()
        .await?;
    let other = factory::create_user(db).await?;

    let service = UserService::new(db);
    let result = service
        .update(UpdateUserParams {
            id: other.id,
            username: "maul".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a user that does not exist.
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
    let result = service
        .update(UpdateUserParams {
            id: 31,
            username: "nobody".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
