use super::*;
use sea_orm::EntityTrait;

/// Tests registering a new account.
///
/// Verifies that the returned user carries the public fields and that the stored
/// password is a bcrypt hash of the submitted value, never the value itself.
///
/// Expected: Ok(User) and a verifiable hash in the database
#[tokio::test]
async fn registers_user_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = CredentialService::new(db, &tokens, TEST_BCRYPT_COST);
    let user = service
        .register(register_params(Some("luke"), "luke@x.com", "usetheforce"))
        .await?;

    assert_eq!(user.username.as_deref(), Some("luke"));
    assert_eq!(user.mail, "luke@x.com");

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password, "usetheforce");
    assert!(bcrypt::verify("usetheforce", &stored.password).unwrap());

    Ok(())
}

/// Tests registering with a mail address that is already in use.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_mail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::user::UserFactory::new(db)
        .mail("han@falcon.net")
        .build()
        .await?;

    let service = CredentialService::new(db, &tokens, TEST_BCRYPT_COST);
    let result = service
        .register(register_params(None, "han@falcon.net", "chewie"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests registering with a username held by another account.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::user::UserFactory::new(db)
        .username("vader")
        .build()
        .await?;

    let service = CredentialService::new(db, &tokens, TEST_BCRYPT_COST);
    let result = service
        .register(register_params(Some("vader"), "anakin@x.com", "padme"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a failed registration leaves no partial state behind.
///
/// Verifies that after a conflict the same connection still accepts a valid signup,
/// so the rolled back transaction released its connection.
///
/// Expected: Ok(User) for the follow-up registration
#[tokio::test]
async fn recovers_after_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = CredentialService::new(db, &tokens, TEST_BCRYPT_COST);
    service
        .register(register_params(None, "rey@jakku.net", "scavenger"))
        .await?;
    let duplicate = service
        .register(register_params(None, "rey@jakku.net", "scavenger"))
        .await;
    let other = service
        .register(register_params(None, "finn@jakku.net", "fn2187"))
        .await?;

    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    assert_eq!(other.mail, "finn@jakku.net");

    Ok(())
}
