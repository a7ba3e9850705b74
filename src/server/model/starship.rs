//! Starship domain model and creation parameters.

use crate::{
    model::starship::{CreateStarshipDto, StarshipDto},
    server::{
        error::AppError,
        util::parse::{
            non_negative_f64, non_negative_i32, non_negative_i64, optional_string,
            required_string,
        },
    },
};

/// A starship record.
#[derive(Debug, Clone, PartialEq)]
pub struct Starship {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    /// Maximum number of megalights travelled in one standard hour.
    pub mglt: Option<i32>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    pub cost_in_credits: Option<i64>,
    /// Crew size; free text since published figures are often ranges.
    pub crew: Option<String>,
    pub passengers: Option<i64>,
    pub hyperdrive_rating: Option<f64>,
    pub length: Option<f64>,
    pub starship_class: Option<String>,
}

impl Starship {
    pub fn into_dto(self) -> StarshipDto {
        StarshipDto {
            id: self.id,
            name: self.name,
            model: self.model,
            manufacturer: self.manufacturer,
            mglt: self.mglt,
            cargo_capacity: self.cargo_capacity,
            consumables: self.consumables,
            cost_in_credits: self.cost_in_credits,
            crew: self.crew,
            passengers: self.passengers,
            hyperdrive_rating: self.hyperdrive_rating,
            length: self.length,
            starship_class: self.starship_class,
        }
    }

    pub fn from_entity(entity: entity::starship::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            manufacturer: entity.manufacturer,
            mglt: entity.mglt,
            cargo_capacity: entity.cargo_capacity,
            consumables: entity.consumables,
            cost_in_credits: entity.cost_in_credits,
            crew: entity.crew,
            passengers: entity.passengers,
            hyperdrive_rating: entity.hyperdrive_rating,
            length: entity.length,
            starship_class: entity.starship_class,
        }
    }
}

/// Validated parameters for creating a starship.
#[derive(Debug, Clone)]
pub struct CreateStarshipParams {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub mglt: Option<i32>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<String>,
    pub passengers: Option<i64>,
    pub hyperdrive_rating: Option<f64>,
    pub length: Option<f64>,
    pub starship_class: Option<String>,
}

impl CreateStarshipParams {
    pub fn from_dto(dto: CreateStarshipDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_string("name", dto.name)?,
            model: optional_string(dto.model),
            manufacturer: optional_string(dto.manufacturer),
            mglt: non_negative_i32("MGLT", dto.mglt)?,
            cargo_capacity: non_negative_i64("cargo_capacity", dto.cargo_capacity)?,
            consumables: optional_string(dto.consumables),
            cost_in_credits: non_negative_i64("cost_in_credits", dto.cost_in_credits)?,
            crew: optional_string(dto.crew),
            passengers: non_negative_i64("passengers", dto.passengers)?,
            hyperdrive_rating: non_negative_f64("hyperdrive_rating", dto.hyperdrive_rating)?,
            length: non_negative_f64("length", dto.length)?,
            starship_class: optional_string(dto.starship_class),
        })
    }
}
