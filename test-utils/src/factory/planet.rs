//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    climate: Option<String>,
    population: Option<i64>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Planet {id}"`
    /// - climate: `Some("temperate")`
    /// - population: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Planet {}", id),
            climate: Some("temperate".to_string()),
            population: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }

    pub fn population(mut self, population: i64) -> Self {
        self.population = Some(population);
        self
    }

    /// Builds and inserts the planet entity into the database.
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            climate: ActiveValue::Set(self.climate),
            diameter: ActiveValue::Set(None),
            gravity: ActiveValue::Set(None),
            orbital_period: ActiveValue::Set(None),
            population: ActiveValue::Set(self.population),
            rotation_period: ActiveValue::Set(None),
            surface_water: ActiveValue::Set(None),
            terrain: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
