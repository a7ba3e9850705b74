//! User factory for creating test user entities.
//!
//! Passwords are stored as bcrypt hashes exactly like the credential service stores them,
//! so factory-created users can log in with the plaintext password they were built with.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password every factory user gets unless overridden.
pub const DEFAULT_PASSWORD: &str = "password";

/// Lowest cost bcrypt accepts; keeps hashing fast in tests.
const FACTORY_BCRYPT_COST: u32 = 4;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("leia")
///     .mail("leia@alderaan.gov")
///     .password("hope")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: Option<String>,
    mail: String,
    password: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - mail: `"user_{id}@holocron.test"`
    /// - password: [`DEFAULT_PASSWORD`]
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: Some(format!("user_{}", id)),
            mail: format!("user_{}@holocron.test", id),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    /// Sets the username for the user.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Clears the username, leaving the column NULL.
    pub fn without_username(mut self) -> Self {
        self.username = None;
        self
    }

    /// Sets the mail address for the user.
    pub fn mail(mut self, mail: impl Into<String>) -> Self {
        self.mail = mail.into();
        self
    }

    /// Sets the plaintext password; it is hashed before insert.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert, or the password failed to hash
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let hash = bcrypt::hash(&self.password, FACTORY_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            mail: ActiveValue::Set(self.mail),
            password: ActiveValue::Set(hash),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
