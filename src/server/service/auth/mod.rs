//! Credential handling: signup, login, and bearer token verification.
//!
//! Passwords are stored only as bcrypt hashes and tokens are HS256 JWTs signed with the
//! configured secret.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{IssuedToken, LoginParams},
        user::{CreateUserParams, RegisterUserParams, User},
    },
};

use self::token::TokenService;

pub mod password;
pub mod token;

/// Hashed in place of the submitted password when the mail is unknown.
const UNKNOWN_MAIL_PASSWORD: &str = "unknown-mail-placeholder";

/// Service for registering users and exchanging credentials for bearer tokens.
pub struct CredentialService<'a> {
    /// Database connection for user lookups and inserts.
    pub db: &'a DatabaseConnection,
    /// Token signer shared through application state.
    pub tokens: &'a TokenService,
    /// Bcrypt work factor for new password hashes.
    pub bcrypt_cost: u32,
}

impl<'a> CredentialService<'a> {
    /// Creates a new CredentialService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Reference to the configured token service
    /// - `bcrypt_cost` - Bcrypt work factor for hashing new passwords
    ///
    /// # Returns
    /// - `CredentialService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, bcrypt_cost: u32) -> Self {
        Self {
            db,
            tokens,
            bcrypt_cost,
        }
    }

    /// Registers a new user account.
    ///
    /// Hashes the password, then checks mail and username uniqueness and inserts the
    /// user inside one transaction. A unique violation raised by a concurrent signup is
    /// reported the same way as the up-front checks.
    ///
    /// # Arguments
    /// - `params` - Validated signup parameters
    ///
    /// # Returns
    /// - `Ok(User)` - The created user's public fields
    /// - `Err(AppError::Conflict)` - Mail or username already in use
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let password_hash = password::hash(params.password, self.bcrypt_cost).await?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if let Some(username) = &params.username {
            if repo.username_taken(username, None).await? {
                return Err(AppError::Conflict("Username already exists.".to_string()));
            }
        }

        if repo.mail_exists(&params.mail).await? {
            return Err(AppError::Conflict("Mail already exists.".to_string()));
        }

        let user = repo
            .create(CreateUserParams {
                username: params.username,
                mail: params.mail,
                password_hash,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "User already exists."))?;

        txn.commit().await?;

        tracing::debug!("Registered user {}", user.id);

        Ok(user)
    }

    /// Exchanges mail and password for a bearer token.
    ///
    /// Unknown mail addresses still pay for one bcrypt hash so that response timing does
    /// not reveal which accounts exist.
    ///
    /// # Arguments
    /// - `params` - Validated login parameters
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Signed token and the authenticated user's id
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown mail or wrong password
    /// - `Err(AppError)` - Hashing, signing, or database failure
    pub async fn authenticate(&self, params: LoginParams) -> Result<IssuedToken, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_credentials_by_mail(&params.mail).await? else {
            password::hash(UNKNOWN_MAIL_PASSWORD.to_string(), self.bcrypt_cost).await?;
            tracing::warn!("Login attempt for unknown mail");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify(params.password, credentials.password_hash).await? {
            tracing::warn!("Failed login for user {}", credentials.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(credentials.id)?;

        tracing::debug!("Issued token for user {}", credentials.id);

        Ok(IssuedToken {
            token,
            user_id: credentials.id,
        })
    }

    /// Verifies a bearer token and returns the user id it was issued for.
    ///
    /// Does not check that the user still exists; see `AuthGuard` for that.
    pub fn verify(&self, token: &str) -> Result<i32, AppError> {
        Ok(self.tokens.verify(token)?)
    }
}
