use super::*;

/// Tests fetching catalog entries that exist.
///
/// Expected: Ok for character, planet, and starship lookups
#[tokio::test]
async fn returns_existing_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let planet = factory::create_planet(db).await?;
    let starship = factory::create_starship(db).await?;

    assert_eq!(
        CharacterService::new(db).get_by_id(character.id).await?.name,
        character.name
    );
    assert_eq!(
        PlanetService::new(db).get_by_id(planet.id).await?.name,
        planet.name
    );
    assert_eq!(
        StarshipService::new(db).get_by_id(starship.id).await?.name,
        starship.name
    );

    Ok(())
}

/// Tests fetching catalog ids that were never assigned.
///
/// Expected: Err(AppError::NotFound) for each kind
#[tokio::test]
async fn rejects_unknown_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(matches!(
        CharacterService::new(db).get_by_id(1).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        PlanetService::new(db).get_by_id(1).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        StarshipService::new(db).get_by_id(1).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
