use super::*;

/// Tests creating a planet with every attribute.
///
/// Verifies that wide integer columns such as population keep their full value.
///
/// Expected: Ok(Planet) readable through get_by_id
#[tokio::test]
async fn creates_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(CreatePlanetParams {
            name: "Coruscant".to_string(),
            climate: Some("temperate".to_string()),
            diameter: Some(12240),
            gravity: Some("1 standard".to_string()),
            orbital_period: Some(368),
            population: Some(1_000_000_000_000),
            rotation_period: Some(24),
            surface_water: None,
            terrain: Some("cityscape, mountains".to_string()),
        })
        .await?;

    let fetched = repo.get_by_id(planet.id).await?.unwrap();

    assert_eq!(fetched.name, "Coruscant");
    assert_eq!(fetched.population, Some(1_000_000_000_000));
    assert_eq!(fetched.surface_water, None);

    Ok(())
}

/// Tests listing planets.
///
/// Expected: Ok(Vec<Planet>) ordered by id
#[tokio::test]
async fn lists_planets_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
