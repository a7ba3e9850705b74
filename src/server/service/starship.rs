//! Starship service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::starship::StarshipRepository,
    error::AppError,
    model::starship::{CreateStarshipParams, Starship},
};

/// Service providing catalog operations for starships.
pub struct StarshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateStarshipParams) -> Result<Starship, AppError> {
        let repo = StarshipRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all starships ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Starship>, AppError> {
        let repo = StarshipRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a starship by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Starship, AppError> {
        let repo = StarshipRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Starship not found.".to_string()))
    }

    /// Deletes a starship along with every favorite pointing at it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = StarshipRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Starship not found.".to_string()));
        }

        Ok(())
    }
}
