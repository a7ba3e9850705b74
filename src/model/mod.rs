//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON shapes accepted and returned by the controllers. Request
//! DTOs keep every client-supplied field optional so that missing input surfaces as a
//! `400` with the standard error envelope instead of an extractor rejection.

pub mod api;
pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
