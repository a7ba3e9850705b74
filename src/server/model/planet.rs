//! Planet domain model and creation parameters.

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{
        error::AppError,
        util::parse::{non_negative_i32, non_negative_i64, optional_string, required_string},
    },
};

/// A planet record.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub diameter: Option<i32>,
    pub gravity: Option<String>,
    pub orbital_period: Option<i32>,
    pub population: Option<i64>,
    pub rotation_period: Option<i32>,
    pub surface_water: Option<i32>,
    pub terrain: Option<String>,
}

impl Planet {
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            climate: self.climate,
            diameter: self.diameter,
            gravity: self.gravity,
            orbital_period: self.orbital_period,
            population: self.population,
            rotation_period: self.rotation_period,
            surface_water: self.surface_water,
            terrain: self.terrain,
        }
    }

    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            climate: entity.climate,
            diameter: entity.diameter,
            gravity: entity.gravity,
            orbital_period: entity.orbital_period,
            population: entity.population,
            rotation_period: entity.rotation_period,
            surface_water: entity.surface_water,
            terrain: entity.terrain,
        }
    }
}

/// Validated parameters for creating a planet.
#[derive(Debug, Clone)]
pub struct CreatePlanetParams {
    pub name: String,
    pub climate: Option<String>,
    pub diameter: Option<i32>,
    pub gravity: Option<String>,
    pub orbital_period: Option<i32>,
    pub population: Option<i64>,
    pub rotation_period: Option<i32>,
    pub surface_water: Option<i32>,
    pub terrain: Option<String>,
}

impl CreatePlanetParams {
    pub fn from_dto(dto: CreatePlanetDto) -> Result<Self, AppError> {
        let surface_water = non_negative_i32("surface_water", dto.surface_water)?;
        if surface_water.is_some_and(|water| water > 100) {
            return Err(AppError::BadRequest(
                "surface_water is a percentage and cannot exceed 100.".to_string(),
            ));
        }

        Ok(Self {
            name: required_string("name", dto.name)?,
            climate: optional_string(dto.climate),
            diameter: non_negative_i32("diameter", dto.diameter)?,
            gravity: optional_string(dto.gravity),
            orbital_period: non_negative_i32("orbital_period", dto.orbital_period)?,
            population: non_negative_i64("population", dto.population)?,
            rotation_period: non_negative_i32("rotation_period", dto.rotation_period)?,
            surface_water,
            terrain: optional_string(dto.terrain),
        })
    }
}
