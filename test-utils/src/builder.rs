use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Planet};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Planet)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after all tables exist.
    ///
    /// Entity-derived schemas only carry single-column constraints, so composite unique
    /// indexes that migrations declare are added here.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user table and the three catalog tables.
    ///
    /// Adds, in order: User, Character, Planet, Starship.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(Character)
            .with_table(Planet)
            .with_table(Starship)
    }

    /// Adds every table required for favorite operations.
    ///
    /// Adds the catalog tables followed by the three favorite join tables, together with
    /// the unique `(user_id, target_id)` index for each join table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_favorite_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_favorite_tables(mut self) -> Self {
        self.indexes.push(
            Index::create()
                .name("idx_favorite_character_user_character_unique")
                .table(FavoriteCharacter)
                .col(entity::favorite_character::Column::UserId)
                .col(entity::favorite_character::Column::CharacterId)
                .unique()
                .to_owned(),
        );
        self.indexes.push(
            Index::create()
                .name("idx_favorite_planet_user_planet_unique")
                .table(FavoritePlanet)
                .col(entity::favorite_planet::Column::UserId)
                .col(entity::favorite_planet::Column::PlanetId)
                .unique()
                .to_owned(),
        );
        self.indexes.push(
            Index::create()
                .name("idx_favorite_starship_user_starship_unique")
                .table(FavoriteStarship)
                .col(entity::favorite_starship::Column::UserId)
                .col(entity::favorite_starship::Column::StarshipId)
                .unique()
                .to_owned(),
        );

        self.with_catalog_tables()
            .with_table(FavoriteCharacter)
            .with_table(FavoritePlanet)
            .with_table(FavoriteStarship)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements in the order they were added, then creates the configured indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::DbErr)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
