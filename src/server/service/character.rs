//! Character service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository,
    error::AppError,
    model::character::{CreateCharacterParams, Character},
};

/// Service providing catalog operations for characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character.
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all characters ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a character by id.
    ///
    /// # Returns
    /// - `Ok(Character)` - Character found
    /// - `Err(AppError::NotFound)` - No character with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found.".to_string()))
    }

    /// Deletes a character along with every favorite pointing at it.
    ///
    /// # Returns
    /// - `Ok(())` - Character deleted
    /// - `Err(AppError::NotFound)` - No character with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CharacterRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Character not found.".to_string()));
        }

        Ok(())
    }
}
