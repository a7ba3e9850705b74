//! User service for business logic.
//!
//! This module provides the `UserService` for listing users, reading a single profile,
//! and changing a username. Account creation lives in the credential service.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateUserParams, User},
};

/// Service providing business logic for user profiles.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_all().await?)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))
    }

    /// Changes a user's username.
    ///
    /// Keeping the current username is allowed; taking another user's name is not.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - Username held by another user
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if !user_repo.exists(params.id).await? {
            return Err(AppError::NotFound("User not found.".to_string()));
        }

        if user_repo
            .username_taken(&params.username, Some(params.id))
            .await?
        {
            return Err(AppError::Conflict("Username already exists.".to_string()));
        }

        let user = user_repo
            .update_username(params.id, params.username)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Username already exists."))?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        txn.commit().await?;

        Ok(user)
    }
}
