use super::*;

/// Tests logging in with correct credentials.
///
/// Verifies that the issued token decodes back to the authenticated user's id.
///
/// Expected: Ok(IssuedToken) whose token verifies to the user id
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::UserFactory::new(db)
        .mail("leia@alderaan.gov")
        .password("hope")
        .build()
        .await?;

    let service = CredentialService::new(db, &tokens, TEST_BCRYPT_COST);
    let issued = service
        .authenticate(LoginParams {
            mail: "leia@alderaan.gov".to_string(),
            password: "hope".to_string(),
        })
        .await?;

    assert_eq!(issued.user_id, user.id);
    assert_eq!(service.verify(&issued.token)?, user.id);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::user::UserFactory::new(db)
        .mail("leia@alderaan.gov")
        .password("hope")
        .build()
        .await?;

    let service = CredentialService::new(db, &tokens, TEST_BCRYPT_COST);
    let result = service
        .authenticate(LoginParams {
            mail: "leia@alderaan.gov".to_string(),
            password: "despair".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unknown mail address.
///
/// Verifies that the failure is indistinguishable from a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_mail_like_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = CredentialService::new(db, &tokens, TEST_BCRYPT_COST);
    let result = service
        .authenticate(LoginParams {
            mail: "nobody@x.com".to_string(),
            password: "anything".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests verifying a token that was not issued by this service.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let foreign = TokenService::new("other-secret", Duration::minutes(60)).issue(1)?;

    let service = CredentialService::new(db, &tokens, TEST_BCRYPT_COST);

    assert!(matches!(
        service.verify(&foreign),
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests logging in with the stored password plus extra trailing bytes.
///
/// Verifies that a password matching the stored one only on its first 72 bytes is
/// rejected, and that an overlong password for an unknown mail fails the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) in both cases
#[tokio::test]
async fn rejects_password_sharing_only_a_prefix() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = CredentialService::new(db, &tokens, TEST_BCRYPT_COST);
    service
        .register(register_params(None, "han@falcon.net", &"x".repeat(72)))
        .await?;

    let longer = service
        .authenticate(LoginParams {
            mail: "han@falcon.net".to_string(),
            password: "x".repeat(73),
        })
        .await;
    let unknown = service
        .authenticate(LoginParams {
            mail: "nobody@x.com".to_string(),
            password: "x".repeat(100),
        })
        .await;

    assert!(matches!(
        longer,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
