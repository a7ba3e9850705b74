//! Favorite factories for creating user-to-entity join rows.
//!
//! The referenced user and target must already exist; foreign keys are enforced.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks a character as a favorite of the user.
pub async fn create_favorite_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::favorite_character::Model, DbErr> {
    entity::favorite_character::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
    }
    .insert(db)
    .await
}

/// Marks a planet as a favorite of the user.
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite_planet::Model, DbErr> {
    entity::favorite_planet::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
    }
    .insert(db)
    .await
}

/// Marks a starship as a favorite of the user.
pub async fn create_favorite_starship(
    db: &DatabaseConnection,
    user_id: i32,
    starship_id: i32,
) -> Result<entity::favorite_starship::Model, DbErr> {
    entity::favorite_starship::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        starship_id: ActiveValue::Set(starship_id),
    }
    .insert(db)
    .await
}
