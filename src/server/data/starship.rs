//! Starship data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::starship::{CreateStarshipParams, Starship};

/// Repository providing database operations for starships.
pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new starship.
    pub async fn create(&self, params: CreateStarshipParams) -> Result<Starship, DbErr> {
        let entity = entity::starship::ActiveModel {
            name: ActiveValue::Set(params.name),
            model: ActiveValue::Set(params.model),
            manufacturer: ActiveValue::Set(params.manufacturer),
            mglt: ActiveValue::Set(params.mglt),
            cargo_capacity: ActiveValue::Set(params.cargo_capacity),
            consumables: ActiveValue::Set(params.consumables),
            cost_in_credits: ActiveValue::Set(params.cost_in_credits),
            crew: ActiveValue::Set(params.crew),
            passengers: ActiveValue::Set(params.passengers),
            hyperdrive_rating: ActiveValue::Set(params.hyperdrive_rating),
            length: ActiveValue::Set(params.length),
            starship_class: ActiveValue::Set(params.starship_class),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Starship::from_entity(entity))
    }

    /// Gets all starships ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Starship>, DbErr> {
        let entities = entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Starship::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Starship>, DbErr> {
        let entity = entity::prelude::Starship::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Starship::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Starship::find()
            .filter(entity::starship::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a starship by id, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Starship::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
