use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string(Planet::Name))
                    .col(string_null(Planet::Climate))
                    .col(integer_null(Planet::Diameter))
                    .col(string_null(Planet::Gravity))
                    .col(integer_null(Planet::OrbitalPeriod))
                    .col(big_integer_null(Planet::Population))
                    .col(integer_null(Planet::RotationPeriod))
                    .col(integer_null(Planet::SurfaceWater))
                    .col(string_null(Planet::Terrain))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Climate,
    Diameter,
    Gravity,
    OrbitalPeriod,
    Population,
    RotationPeriod,
    SurfaceWater,
    Terrain,
}
