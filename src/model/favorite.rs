use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every favorite of a user, grouped by kind, each list in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritesDto {
    pub characters: Vec<i32>,
    pub planets: Vec<i32>,
    pub starships: Vec<i32>,
}

/// A single favorite join record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub target_id: i32,
}

/// Payload for adding or removing a favorite.
///
/// The target may be sent as `target_id` or under the key matching the endpoint's kind
/// (`character_id` on `/favorites/character`, and so on). A key for another kind is
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRequestDto {
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starship_id: Option<i32>,
}
