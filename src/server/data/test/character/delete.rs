use super::*;

/// Tests deleting an existing character.
///
/// Expected: Ok(true) and the row is gone afterwards
#[tokio::test]
async fn deletes_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a character that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    assert!(!repo.delete(99).await?);

    Ok(())
}
