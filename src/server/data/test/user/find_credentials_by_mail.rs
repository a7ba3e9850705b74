use super::*;

/// Tests looking up credentials for a known mail address.
///
/// Verifies that the stored bcrypt hash and the user id are returned.
///
/// Expected: Ok(Some(UserCredentials)) whose hash verifies the factory password
#[tokio::test]
async fn finds_credentials_for_existing_mail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .mail("leia@alderaan.gov")
        .password("hope")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo
        .find_credentials_by_mail("leia@alderaan.gov")
        .await?
        .unwrap();

    assert_eq!(credentials.id, user.id);
    assert!(bcrypt::verify("hope", &credentials.password_hash).unwrap());

    Ok(())
}

/// Tests looking up an unknown mail address.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_mail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_mail("nobody@holocron.test").await?;

    assert!(result.is_none());

    Ok(())
}
