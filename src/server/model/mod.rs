//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types validate request DTOs before they reach service logic.

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
