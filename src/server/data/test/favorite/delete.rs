use super::*;

/// Tests removing an existing favorite.
///
/// Verifies that only the matching pair is removed.
///
/// Expected: Ok(true) and the other favorite remains
#[tokio::test]
async fn deletes_matching_pair_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_starship(db).await?;
    let second = factory::create_starship(db).await?;
    factory::create_favorite_starship(db, user.id, first.id).await?;
    factory::create_favorite_starship(db, user.id, second.id).await?;

    let repo = FavoriteRepository::new(db);
    let removed = repo
        .delete(params(FavoriteKind::Starship, user.id, first.id))
        .await?;

    assert!(removed);
    assert_eq!(
        repo.get_target_ids_by_user(FavoriteKind::Starship, user.id)
            .await?,
        vec![second.id]
    );

    Ok(())
}

/// Tests removing a favorite that was never added.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let repo = FavoriteRepository::new(db);
    let removed = repo
        .delete(params(FavoriteKind::Character, user.id, character.id))
        .await?;

    assert!(!removed);

    Ok(())
}
