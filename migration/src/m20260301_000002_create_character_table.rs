use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string(Character::Name))
                    .col(string_null(Character::BirthYear))
                    .col(string_null(Character::EyeColor))
                    .col(string_null(Character::HairColor))
                    .col(string_null(Character::SkinColor))
                    .col(string_null(Character::Gender))
                    .col(integer_null(Character::Height))
                    .col(integer_null(Character::Mass))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    BirthYear,
    EyeColor,
    HairColor,
    SkinColor,
    Gender,
    Height,
    Mass,
}
