use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login payload for `POST /token`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TokenRequestDto {
    pub mail: Option<String>,
    pub password: Option<String>,
}

/// Issued bearer token together with the id of the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub user_id: i32,
}
