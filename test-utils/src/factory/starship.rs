//! Starship factory for creating test starship entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test starships with customizable fields.
pub struct StarshipFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: Option<String>,
    hyperdrive_rating: Option<f64>,
}

impl<'a> StarshipFactory<'a> {
    /// Creates a new StarshipFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Starship {id}"`
    /// - model: `None`
    /// - hyperdrive_rating: `Some(1.0)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Starship {}", id),
            model: None,
            hyperdrive_rating: Some(1.0),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn hyperdrive_rating(mut self, rating: f64) -> Self {
        self.hyperdrive_rating = Some(rating);
        self
    }

    /// Builds and inserts the starship entity into the database.
    pub async fn build(self) -> Result<entity::starship::Model, DbErr> {
        entity::starship::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            manufacturer: ActiveValue::Set(None),
            mglt: ActiveValue::Set(None),
            cargo_capacity: ActiveValue::Set(None),
            consumables: ActiveValue::Set(None),
            cost_in_credits: ActiveValue::Set(None),
            crew: ActiveValue::Set(None),
            passengers: ActiveValue::Set(None),
            hyperdrive_rating: ActiveValue::Set(self.hyperdrive_rating),
            length: ActiveValue::Set(None),
            starship_class: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a starship with default values.
pub async fn create_starship(db: &DatabaseConnection) -> Result<entity::starship::Model, DbErr> {
    StarshipFactory::new(db).build().await
}
