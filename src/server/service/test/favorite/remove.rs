use super::*;

/// Tests removing an existing favorite.
///
/// Expected: Ok(()) and the favorite is gone from the list
#[tokio::test]
async fn removes_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let starship = factory::create_starship(db).await?;
    factory::create_favorite_starship(db, user.id, starship.id).await?;

    let service = FavoriteService::new(db);
    service
        .remove(params(FavoriteKind::Starship, user.id, starship.id))
        .await?;

    assert!(service.list(user.id).await?.starships.is_empty());

    Ok(())
}

/// Tests that one user cannot remove another user's favorite.
///
/// Verifies that the delete is scoped to the requesting user and leaves the
/// owner's favorite untouched.
///
/// Expected: Err(AppError::NotFound) and the owner's favorite remains
#[tokio::test]
async fn does_not_touch_other_users_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_favorite_character(db, owner.id, character.id).await?;

    let service = FavoriteService::new(db);
    let result = service
        .remove(params(FavoriteKind::Character, intruder.id, character.id))
        .await;

    match result {
        Err(AppError::NotFound(msg)) => {
            assert_eq!(msg, "Favorite character not found for this user.")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(service.list(owner.id).await?.characters, vec![character.id]);

    Ok(())
}

/// Tests removing a favorite for a user that does not exist.
///
/// Expected: Err(AppError::NotFound) with the user message
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let service = FavoriteService::new(db);
    let result = service
        .remove(params(FavoriteKind::Planet, 77, planet.id))
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "User not found."),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
