//! Favorite data repository for database operations.
//!
//! Favorites live in three join tables, one per catalog kind. This repository dispatches on
//! [`FavoriteKind`] so callers work with a single API regardless of which table backs it.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::favorite::{Favorite, FavoriteKind, FavoriteParams, Favorites};

/// Repository providing database operations for user favorites.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a favorite row into the table matching `params.kind`.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Database error, including a unique violation when the pair exists
    ///   or a foreign key violation when the user or target is missing
    pub async fn create(&self, params: FavoriteParams) -> Result<Favorite, DbErr> {
        let favorite = match params.kind {
            FavoriteKind::Character => Favorite::from_character_entity(
                entity::favorite_character::ActiveModel {
                    user_id: ActiveValue::Set(params.user_id),
                    character_id: ActiveValue::Set(params.target_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
            FavoriteKind::Planet => Favorite::from_planet_entity(
                entity::favorite_planet::ActiveModel {
                    user_id: ActiveValue::Set(params.user_id),
                    planet_id: ActiveValue::Set(params.target_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
            FavoriteKind::Starship => Favorite::from_starship_entity(
                entity::favorite_starship::ActiveModel {
                    user_id: ActiveValue::Set(params.user_id),
                    starship_id: ActiveValue::Set(params.target_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
        };

        Ok(favorite)
    }

    /// Checks whether the user already has the target as a favorite.
    pub async fn exists(&self, params: FavoriteParams) -> Result<bool, DbErr> {
        let count = match params.kind {
            FavoriteKind::Character => {
                entity::prelude::FavoriteCharacter::find()
                    .filter(entity::favorite_character::Column::UserId.eq(params.user_id))
                    .filter(entity::favorite_character::Column::CharacterId.eq(params.target_id))
                    .count(self.db)
                    .await?
            }
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::find()
                    .filter(entity::favorite_planet::Column::UserId.eq(params.user_id))
                    .filter(entity::favorite_planet::Column::PlanetId.eq(params.target_id))
                    .count(self.db)
                    .await?
            }
            FavoriteKind::Starship => {
                entity::prelude::FavoriteStarship::find()
                    .filter(entity::favorite_starship::Column::UserId.eq(params.user_id))
                    .filter(entity::favorite_starship::Column::StarshipId.eq(params.target_id))
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }

    /// Gets the target ids a user has favorited for one kind.
    ///
    /// Ids are returned in the order the favorites were added.
    pub async fn get_target_ids_by_user(
        &self,
        kind: FavoriteKind,
        user_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        match kind {
            FavoriteKind::Character => {
                entity::prelude::FavoriteCharacter::find()
                    .select_only()
                    .column(entity::favorite_character::Column::CharacterId)
                    .filter(entity::favorite_character::Column::UserId.eq(user_id))
                    .order_by_asc(entity::favorite_character::Column::Id)
                    .into_tuple::<i32>()
                    .all(self.db)
                    .await
            }
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::find()
                    .select_only()
                    .column(entity::favorite_planet::Column::PlanetId)
                    .filter(entity::favorite_planet::Column::UserId.eq(user_id))
                    .order_by_asc(entity::favorite_planet::Column::Id)
                    .into_tuple::<i32>()
                    .all(self.db)
                    .await
            }
            FavoriteKind::Starship => {
                entity::prelude::FavoriteStarship::find()
                    .select_only()
                    .column(entity::favorite_starship::Column::StarshipId)
                    .filter(entity::favorite_starship::Column::UserId.eq(user_id))
                    .order_by_asc(entity::favorite_starship::Column::Id)
                    .into_tuple::<i32>()
                    .all(self.db)
                    .await
            }
        }
    }

    /// Gets every favorite of a user grouped by kind.
    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Favorites, DbErr> {
        Ok(Favorites {
            characters: self
                .get_target_ids_by_user(FavoriteKind::Character, user_id)
                .await?,
            planets: self
                .get_target_ids_by_user(FavoriteKind::Planet, user_id)
                .await?,
            starships: self
                .get_target_ids_by_user(FavoriteKind::Starship, user_id)
                .await?,
        })
    }

    /// Deletes the favorite linking the user and target.
    ///
    /// # Returns
    /// - `Ok(true)` - Favorite removed
    /// - `Ok(false)` - No such favorite
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, params: FavoriteParams) -> Result<bool, DbErr> {
        let result = match params.kind {
            FavoriteKind::Character => {
                entity::prelude::FavoriteCharacter::delete_many()
                    .filter(entity::favorite_character::Column::UserId.eq(params.user_id))
                    .filter(entity::favorite_character::Column::CharacterId.eq(params.target_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::delete_many()
                    .filter(entity::favorite_planet::Column::UserId.eq(params.user_id))
                    .filter(entity::favorite_planet::Column::PlanetId.eq(params.target_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Starship => {
                entity::prelude::FavoriteStarship::delete_many()
                    .filter(entity::favorite_starship::Column::UserId.eq(params.user_id))
                    .filter(entity::favorite_starship::Column::StarshipId.eq(params.target_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }
}
