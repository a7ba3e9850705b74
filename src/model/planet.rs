use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub diameter: Option<i32>,
    pub gravity: Option<String>,
    pub orbital_period: Option<i32>,
    pub population: Option<i64>,
    pub rotation_period: Option<i32>,
    pub surface_water: Option<i32>,
    pub terrain: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub diameter: Option<i64>,
    pub gravity: Option<String>,
    pub orbital_period: Option<i64>,
    pub population: Option<i64>,
    pub rotation_period: Option<i64>,
    pub surface_water: Option<i64>,
    pub terrain: Option<String>,
}
