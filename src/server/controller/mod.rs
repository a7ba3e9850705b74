//! HTTP request handlers.
//!
//! Controllers validate request DTOs into parameter types, call into the service layer,
//! and convert the resulting domain models back into DTOs. Every handler carries a
//! `utoipa::path` annotation that feeds the generated OpenAPI document.

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
