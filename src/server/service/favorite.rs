//! Favorite service for business logic.
//!
//! Every favorite kind goes through the same checks: the user must exist, the target must
//! exist when adding, and a pair can be favorited only once. Add and remove each run in a
//! single transaction.

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
        starship::StarshipRepository, user::UserRepository,
    },
    error::AppError,
    model::favorite::{Favorite, FavoriteKind, FavoriteParams, Favorites},
};

/// Service providing business logic for user favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a character, planet, or starship as a favorite of a user.
    ///
    /// # Arguments
    /// - `params` - Kind, user id, and target id
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::NotFound)` - User or target does not exist
    /// - `Err(AppError::Conflict)` - The user already has this favorite
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(&self, params: FavoriteParams) -> Result<Favorite, AppError> {
        let txn = self.db.begin().await?;

        ensure_user_exists(&txn, params.user_id).await?;

        if !target_exists(&txn, params.kind, params.target_id).await? {
            return Err(AppError::NotFound(format!(
                "{} not found.",
                params.kind.title()
            )));
        }

        let favorite_repo = FavoriteRepository::new(&txn);
        let conflict = format!("{} is already a favorite of this user.", params.kind.title());

        if favorite_repo.exists(params).await? {
            return Err(AppError::Conflict(conflict));
        }

        let favorite = favorite_repo
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, &conflict))?;

        txn.commit().await?;

        tracing::debug!(
            "User {} added favorite {} {}",
            favorite.user_id,
            favorite.kind,
            favorite.target_id
        );

        Ok(favorite)
    }

    /// Lists every favorite of a user grouped by kind.
    ///
    /// # Returns
    /// - `Ok(Favorites)` - Target ids per kind, in the order they were added
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn list(&self, user_id: i32) -> Result<Favorites, AppError> {
        ensure_user_exists(self.db, user_id).await?;

        Ok(FavoriteRepository::new(self.db)
            .get_all_by_user(user_id)
            .await?)
    }

    /// Removes one favorite of a user.
    ///
    /// Only the row matching both the user and the target is touched, so one user can
    /// never remove another user's favorite.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(AppError::NotFound)` - User does not exist or has no such favorite
    pub async fn remove(&self, params: FavoriteParams) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        ensure_user_exists(&txn, params.user_id).await?;

        if !FavoriteRepository::new(&txn).delete(params).await? {
            return Err(AppError::NotFound(format!(
                "Favorite {} not found for this user.",
                params.kind
            )));
        }

        txn.commit().await?;

        tracing::debug!(
            "User {} removed favorite {} {}",
            params.user_id,
            params.kind,
            params.target_id
        );

        Ok(())
    }
}

async fn ensure_user_exists<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<(), AppError> {
    if !UserRepository::new(db).exists(user_id).await? {
        return Err(AppError::NotFound("User not found.".to_string()));
    }

    Ok(())
}

async fn target_exists<C: ConnectionTrait>(
    db: &C,
    kind: FavoriteKind,
    target_id: i32,
) -> Result<bool, DbErr> {
    match kind {
        FavoriteKind::Character => CharacterRepository::new(db).exists(target_id).await,
        FavoriteKind::Planet => PlanetRepository::new(db).exists(target_id).await,
        FavoriteKind::Starship => StarshipRepository::new(db).exists(target_id).await,
    }
}
