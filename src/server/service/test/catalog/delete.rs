use super::*;

/// Tests deleting a character twice.
///
/// Expected: Ok(()) the first time, Err(AppError::NotFound) the second
#[tokio::test]
async fn second_delete_reports_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let service = CharacterService::new(db);
    service.delete(character.id).await?;

    assert!(matches!(
        service.delete(character.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a starship that has been favorited.
///
/// Verifies that the favorite does not block the delete.
///
/// Expected: Ok(())
#[tokio::test]
async fn deletes_favorited_starship() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let starship = factory::create_starship(db).await?;
    factory::create_favorite_starship(db, user.id, starship.id).await?;

    let service = StarshipService::new(db);
    service.delete(starship.id).await?;

    assert!(matches!(
        service.get_by_id(starship.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
