//! Favorite domain models and parameters.
//!
//! The three favorite kinds share one shape, so the service and repository work with a
//! single `Favorite` model tagged by [`FavoriteKind`] instead of three parallel types.

use std::fmt;

use crate::{
    model::favorite::{FavoriteDto, FavoriteRequestDto, FavoritesDto},
    server::{error::AppError, util::parse::required_id},
};

/// Which catalog entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Character,
    Planet,
    Starship,
}

impl FavoriteKind {
    /// Lowercase name used in messages and request field names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Planet => "planet",
            Self::Starship => "starship",
        }
    }

    /// Capitalized name for the start of client-facing messages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Planet => "Planet",
            Self::Starship => "Starship",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single favorite join record.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub kind: FavoriteKind,
    /// Owning user.
    pub user_id: i32,
    /// ID of the character, planet, or starship.
    pub target_id: i32,
}

impl Favorite {
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            target_id: self.target_id,
        }
    }

    pub fn from_character_entity(entity: entity::favorite_character::Model) -> Self {
        Self {
            id: entity.id,
            kind: FavoriteKind::Character,
            user_id: entity.user_id,
            target_id: entity.character_id,
        }
    }

    pub fn from_planet_entity(entity: entity::favorite_planet::Model) -> Self {
        Self {
            id: entity.id,
            kind: FavoriteKind::Planet,
            user_id: entity.user_id,
            target_id: entity.planet_id,
        }
    }

    pub fn from_starship_entity(entity: entity::favorite_starship::Model) -> Self {
        Self {
            id: entity.id,
            kind: FavoriteKind::Starship,
            user_id: entity.user_id,
            target_id: entity.starship_id,
        }
    }
}

/// Every favorite target id of one user, grouped by kind in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    pub characters: Vec<i32>,
    pub planets: Vec<i32>,
    pub starships: Vec<i32>,
}

impl Favorites {
    pub fn into_dto(self) -> FavoritesDto {
        FavoritesDto {
            characters: self.characters,
            planets: self.planets,
            starships: self.starships,
        }
    }
}

/// Validated input for adding or removing a favorite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FavoriteParams {
    pub kind: FavoriteKind,
    pub user_id: i32,
    pub target_id: i32,
}

impl FavoriteParams {
    /// Validates a favorite request body for the given kind.
    ///
    /// The target is read from `target_id` or from the key named after `kind`. Both may
    /// be sent as long as they agree.
    ///
    /// # Returns
    /// - `Ok(FavoriteParams)` - Both ids present
    /// - `Err(AppError::BadRequest)` - `user_id` or the target missing, the two target
    ///   keys disagree, or a key for another kind was sent
    pub fn from_dto(kind: FavoriteKind, dto: FavoriteRequestDto) -> Result<Self, AppError> {
        let (kind_id, others) = match kind {
            FavoriteKind::Character => (
                dto.character_id,
                [("planet_id", dto.planet_id), ("starship_id", dto.starship_id)],
            ),
            FavoriteKind::Planet => (
                dto.planet_id,
                [("character_id", dto.character_id), ("starship_id", dto.starship_id)],
            ),
            FavoriteKind::Starship => (
                dto.starship_id,
                [("character_id", dto.character_id), ("planet_id", dto.planet_id)],
            ),
        };

        if let Some((field, _)) = others.iter().find(|(_, value)| value.is_some()) {
            return Err(AppError::BadRequest(format!(
                "{} is not accepted for {} favorites.",
                field, kind
            )));
        }

        let target_id = match (dto.target_id, kind_id) {
            (Some(a), Some(b)) if a != b => {
                return Err(AppError::BadRequest(format!(
                    "target_id and {}_id do not match.",
                    kind
                )))
            }
            (target_id, kind_id) => target_id.or(kind_id),
        };

        Ok(Self {
            kind,
            user_id: required_id("user_id", dto.user_id)?,
            target_id: required_id("target_id", target_id)?,
        })
    }
}
