use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public projection of a user. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: Option<String>,
    pub mail: String,
}

/// Signup payload for `POST /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: Option<String>,
    pub mail: Option<String>,
    pub password: Option<String>,
}

/// Profile edit payload for `PUT /users/{user_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub username: Option<String>,
}
