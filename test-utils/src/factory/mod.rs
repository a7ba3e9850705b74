//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories generate unique values for columns carrying
//! unique constraints so repeated calls never collide.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let planet = factory::planet::create_planet(&db).await?;
//!
//!     // Link them
//!     let favorite = factory::favorite::create_favorite_planet(&db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .mail("luke@tatooine.net")
//!     .password("usetheforce")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities with bcrypt-hashed passwords
//! - `character` - Create character entities
//! - `planet` - Create planet entities
//! - `starship` - Create starship entities
//! - `favorite` - Create favorite join rows
//! - `helpers` - Unique id generation

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod starship;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use character::create_character;
pub use favorite::{create_favorite_character, create_favorite_planet, create_favorite_starship};
pub use planet::create_planet;
pub use starship::create_starship;
pub use user::create_user;
