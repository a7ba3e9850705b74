use super::*;

/// Tests deleting a planet and then deleting it again.
///
/// Expected: Ok(true) for the first delete, Ok(false) for the second
#[tokio::test]
async fn deletes_planet_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);

    assert!(repo.delete(planet.id).await?);
    assert!(!repo.delete(planet.id).await?);
    assert!(!repo.exists(planet.id).await?);

    Ok(())
}
