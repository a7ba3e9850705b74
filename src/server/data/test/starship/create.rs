use super::*;

/// Tests creating a starship with fractional ratings.
///
/// Verifies that floating point columns round-trip through the database.
///
/// Expected: Ok(Starship) with matching hyperdrive rating and length
#[tokio::test]
async fn creates_starship() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarshipRepository::new(db);
    let ship = repo
        .create(CreateStarshipParams {
            name: "Millennium Falcon".to_string(),
            model: Some("YT-1300 light freighter".to_string()),
            manufacturer: Some("Corellian Engineering Corporation".to_string()),
            mglt: Some(75),
            cargo_capacity: Some(100_000),
            consumables: Some("2 months".to_string()),
            cost_in_credits: Some(100_000),
            crew: Some("4".to_string()),
            passengers: Some(6),
            hyperdrive_rating: Some(0.5),
            length: Some(34.37),
            starship_class: Some("Light freighter".to_string()),
        })
        .await?;

    let fetched = repo.get_by_id(ship.id).await?.unwrap();

    assert_eq!(fetched.name, "Millennium Falcon");
    assert_eq!(fetched.mglt, Some(75));
    assert_eq!(fetched.hyperdrive_rating, Some(0.5));
    assert_eq!(fetched.length, Some(34.37));

    Ok(())
}

/// Tests listing starships.
///
/// Expected: Ok(Vec<Starship>) ordered by id
#[tokio::test]
async fn lists_starships_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_starship(db).await?;
    let second = factory::create_starship(db).await?;

    let repo = StarshipRepository::new(db);
    let ships = repo.get_all().await?;

    assert_eq!(ships.len(), 2);
    assert_eq!(ships[0].id, first.id);
    assert_eq!(ships[1].id, second.id);

    Ok(())
}
