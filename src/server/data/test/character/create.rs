use super::*;

/// Tests creating a character with optional fields left empty.
///
/// Verifies that only the name is required and unset attributes are stored as NULL.
///
/// Expected: Ok(Character) with the given name and None elsewhere
#[tokio::test]
async fn creates_character_with_only_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo
        .create(CreateCharacterParams {
            name: "R2-D2".to_string(),
            birth_year: None,
            eye_color: None,
            hair_color: None,
            skin_color: None,
            gender: None,
            height: None,
            mass: None,
        })
        .await?;

    assert!(character.id > 0);
    assert_eq!(character.name, "R2-D2");
    assert!(character.height.is_none());
    assert!(character.gender.is_none());

    Ok(())
}

/// Tests listing characters after several inserts.
///
/// Expected: Ok(Vec<Character>) ordered by id
#[tokio::test]
async fn lists_created_characters_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::character::CharacterFactory::new(db)
        .name("Luke Skywalker")
        .height(172)
        .build()
        .await?;
    let leia = factory::character::CharacterFactory::new(db)
        .name("Leia Organa")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_all().await?;

    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].id, luke.id);
    assert_eq!(characters[0].height, Some(172));
    assert_eq!(characters[1].id, leia.id);

    Ok(())
}
