use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(rename = "MGLT")]
    pub mglt: Option<i32>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<String>,
    pub passengers: Option<i64>,
    pub hyperdrive_rating: Option<f64>,
    pub length: Option<f64>,
    pub starship_class: Option<String>,
}

/// Creation payload for `POST /starship`.
///
/// Accepts the legacy `passangers` and `consumable` spellings used by older clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateStarshipDto {
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(rename = "MGLT", alias = "mglt")]
    pub mglt: Option<i64>,
    pub cargo_capacity: Option<i64>,
    #[serde(alias = "consumable")]
    pub consumables: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<String>,
    #[serde(alias = "passangers")]
    pub passengers: Option<i64>,
    pub hyperdrive_rating: Option<f64>,
    pub length: Option<f64>,
    pub starship_class: Option<String>,
}
