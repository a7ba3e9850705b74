use super::*;

/// Tests adding a favorite of each kind for an existing user.
///
/// Expected: Ok(Favorite) for each kind, visible in the user's favorites
#[tokio::test]
async fn adds_favorite_of_each_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let planet = factory::create_planet(db).await?;
    let starship = factory::create_starship(db).await?;

    let service = FavoriteService::new(db);
    service
        .add(params(FavoriteKind::Character, user.id, character.id))
        .await?;
    service
        .add(params(FavoriteKind::Planet, user.id, planet.id))
        .await?;
    let favorite = service
        .add(params(FavoriteKind::Starship, user.id, starship.id))
        .await?;

    assert_eq!(favorite.kind, FavoriteKind::Starship);
    assert_eq!(favorite.user_id, user.id);

    let favorites = service.list(user.id).await?;
    assert_eq!(favorites.characters, vec![character.id]);
    assert_eq!(favorites.planets, vec![planet.id]);
    assert_eq!(favorites.starships, vec![starship.id]);

    Ok(())
}

/// Tests adding a favorite for a user that does not exist.
///
/// Verifies that the user check applies to every kind, not just some.
///
/// Expected: Err(AppError::NotFound) for character, planet, and starship
#[tokio::test]
async fn rejects_unknown_user_for_every_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let planet = factory::create_planet(db).await?;
    let starship = factory::create_starship(db).await?;

    let service = FavoriteService::new(db);

    for (kind, target_id) in [
        (FavoriteKind::Character, character.id),
        (FavoriteKind::Planet, planet.id),
        (FavoriteKind::Starship, starship.id),
    ] {
        let result = service.add(params(kind, 999, target_id)).await;

        match result {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "User not found."),
            other => panic!("expected NotFound for {}, got {:?}", kind, other),
        }
    }

    Ok(())
}

/// Tests adding a favorite pointing at a target that does not exist.
///
/// Expected: Err(AppError::NotFound) naming the kind
#[tokio::test]
async fn rejects_unknown_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = FavoriteService::new(db);
    let result = service
        .add(params(FavoriteKind::Planet, user.id, 404))
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Planet not found."),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests adding the same favorite twice.
///
/// Verifies that the second add is rejected and only one row exists afterwards.
///
/// Expected: Err(AppError::Conflict) and a single entry in the list
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let service = FavoriteService::new(db);
    service
        .add(params(FavoriteKind::Character, user.id, character.id))
        .await?;
    let result = service
        .add(params(FavoriteKind::Character, user.id, character.id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.list(user.id).await?.characters, vec![character.id]);

    Ok(())
}
