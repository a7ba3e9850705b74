use super::*;

/// Tests detecting a username held by another user.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_username_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("vader")
        .build()
        .await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_taken("vader", None).await?);
    assert!(repo.username_taken("vader", Some(other.id)).await?);

    Ok(())
}

/// Tests that a user's own username is not reported as taken when excluded.
///
/// Verifies that the `except_id` filter lets a user keep their current name.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("yoda")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.username_taken("yoda", Some(user.id)).await?);
    assert!(!repo.username_taken("grogu", None).await?);

    Ok(())
}
