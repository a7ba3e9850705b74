use super::*;

/// Tests collecting a user's favorites across all kinds.
///
/// Verifies that ids come back grouped by kind in the order they were added,
/// and that other users' favorites are excluded.
///
/// Expected: Ok(Favorites) containing only the requested user's ids
#[tokio::test]
async fn groups_favorites_by_kind_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let tatooine = factory::create_planet(db).await?;
    let hoth = factory::create_planet(db).await?;
    let luke = factory::create_character(db).await?;

    factory::create_favorite_planet(db, user.id, hoth.id).await?;
    factory::create_favorite_planet(db, user.id, tatooine.id).await?;
    factory::create_favorite_character(db, user.id, luke.id).await?;
    factory::create_favorite_character(db, other.id, luke.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_all_by_user(user.id).await?;

    assert_eq!(favorites.characters, vec![luke.id]);
    assert_eq!(favorites.planets, vec![hoth.id, tatooine.id]);
    assert!(favorites.starships.is_empty());

    Ok(())
}

/// Tests collecting favorites for a user who has none.
///
/// Expected: Ok(Favorites) with three empty lists
#[tokio::test]
async fn returns_empty_lists_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_all_by_user(user.id).await?;

    assert!(favorites.characters.is_empty());
    assert!(favorites.planets.is_empty());
    assert!(favorites.starships.is_empty());

    Ok(())
}
