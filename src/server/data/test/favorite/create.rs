use super::*;
use sea_orm::SqlErr;

/// Tests adding a favorite of each kind.
///
/// Verifies that the repository routes each kind to its own join table and
/// returns the new row tagged with the kind.
///
/// Expected: Ok(Favorite) for character, planet, and starship
#[tokio::test]
async fn creates_favorite_for_each_kind() -> Result<(), DbErr> {
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

    let repo = FavoriteRepository::new(db);
    let fav_character = repo
        .create(params(FavoriteKind::Character, user.id, character.id))
        .await?;
    let fav_planet = repo
        .create(params(FavoriteKind::Planet, user.id, planet.id))
        .await?;
    let fav_starship = repo
        .create(params(FavoriteKind::Starship, user.id, starship.id))
        .await?;

    assert_eq!(fav_character.kind, FavoriteKind::Character);
    assert_eq!(fav_character.target_id, character.id);
    assert_eq!(fav_planet.kind, FavoriteKind::Planet);
    assert_eq!(fav_planet.user_id, user.id);
    assert_eq!(fav_starship.target_id, starship.id);
    assert!(
        repo.exists(params(FavoriteKind::Planet, user.id, planet.id))
            .await?
    );

    Ok(())
}

/// Tests adding the same favorite twice.
///
/// Verifies that the composite unique index rejects a duplicate pair.
///
/// Expected: Err(DbErr) classified as UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.create(params(FavoriteKind::Planet, user.id, planet.id))
        .await?;

    let err = repo
        .create(params(FavoriteKind::Planet, user.id, planet.id))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests adding a favorite pointing at a missing target.
///
/// Verifies that the foreign key on the join table is enforced.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_missing_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let result = repo
        .create(params(FavoriteKind::Starship, user.id, 404))
        .await;

    assert!(result.is_err());

    Ok(())
}
