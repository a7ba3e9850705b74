//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    gender: Option<String>,
    height: Option<i32>,
    mass: Option<i32>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"`
    /// - gender: `None`
    /// - height: `Some(172)`
    /// - mass: `Some(77)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            gender: None,
            height: Some(172),
            mass: Some(77),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn mass(mut self, mass: i32) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            birth_year: ActiveValue::Set(None),
            eye_color: ActiveValue::Set(None),
            hair_color: ActiveValue::Set(None),
            skin_color: ActiveValue::Set(None),
            gender: ActiveValue::Set(self.gender),
            height: ActiveValue::Set(self.height),
            mass: ActiveValue::Set(self.mass),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
