//! Character domain model and creation parameters.

use crate::{
    model::character::{CharacterDto, CreateCharacterDto},
    server::{
        error::AppError,
        util::parse::{non_negative_i32, optional_string, required_string},
    },
};

/// A character record.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub gender: Option<String>,
    /// Height in centimeters.
    pub height: Option<i32>,
    /// Mass in kilograms.
    pub mass: Option<i32>,
}

impl Character {
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            birth_year: self.birth_year,
            eye_color: self.eye_color,
            hair_color: self.hair_color,
            skin_color: self.skin_color,
            gender: self.gender,
            height: self.height,
            mass: self.mass,
        }
    }

    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            birth_year: entity.birth_year,
            eye_color: entity.eye_color,
            hair_color: entity.hair_color,
            skin_color: entity.skin_color,
            gender: entity.gender,
            height: entity.height,
            mass: entity.mass,
        }
    }
}

/// Validated parameters for creating a character.
#[derive(Debug, Clone)]
pub struct CreateCharacterParams {
    pub name: String,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub gender: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
}

impl CreateCharacterParams {
    /// Validates a creation DTO.
    ///
    /// # Returns
    /// - `Ok(CreateCharacterParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Missing name or negative/out-of-range measurements
    pub fn from_dto(dto: CreateCharacterDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_string("name", dto.name)?,
            birth_year: optional_string(dto.birth_year),
            eye_color: optional_string(dto.eye_color),
            hair_color: optional_string(dto.hair_color),
            skin_color: optional_string(dto.skin_color),
            gender: optional_string(dto.gender),
            height: non_negative_i32("height", dto.height)?,
            mass: non_negative_i32("mass", dto.mass)?,
        })
    }
}
