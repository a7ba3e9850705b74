//! Planet service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::{CreatePlanetParams, Planet},
};

/// Service providing catalog operations for planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new planet.
    pub async fn create(&self, params: CreatePlanetParams) -> Result<Planet, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all planets ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a planet by id.
    ///
    /// # Returns
    /// - `Ok(Planet)` - Planet found
    /// - `Err(AppError::NotFound)` - No planet with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        let repo = PlanetRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found.".to_string()))
    }

    /// Deletes a planet along with every favorite pointing at it.
    ///
    /// # Returns
    /// - `Ok(())` - Planet deleted
    /// - `Err(AppError::NotFound)` - No planet with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PlanetRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Planet not found.".to_string()));
        }

        Ok(())
    }
}
