//! User domain models and parameters.
//!
//! Provides the public user model returned by the service layer, the credential model
//! used only during login, and parameter types for signup and profile edits.

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        service::auth::password::MAX_PASSWORD_BYTES,
        util::parse::{optional_string, required_string},
    },
};

/// Public user record.
///
/// Deliberately carries no password hash; use [`UserCredentials`] where the hash is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Surrogate key of the user.
    pub id: i32,
    /// Optional unique display name.
    pub username: Option<String>,
    /// Unique mail address used to log in.
    pub mail: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            mail: self.mail,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped here so it never leaves the data layer through this type.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            mail: entity.mail,
        }
    }
}

/// Stored login material for a user.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    /// Surrogate key of the user.
    pub id: i32,
    /// Bcrypt hash of the user's password.
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            password_hash: entity.password,
        }
    }
}

/// Validated signup input.
///
/// Holds the plaintext password only until the credential service hashes it.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: Option<String>,
    pub mail: String,
    pub password: String,
}

impl RegisterUserParams {
    /// Validates a signup DTO.
    ///
    /// Mail and password are required; a blank username is treated as absent. The
    /// password is not trimmed and must fit in [`MAX_PASSWORD_BYTES`].
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Mail or password missing, or password too long
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let password = match dto.password {
            Some(p) if !p.is_empty() => p,
            _ => {
                return Err(AppError::BadRequest(
                    "Mail and password are required.".to_string(),
                ))
            }
        };
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::BadRequest(format!(
                "Password must be at most {} bytes.",
                MAX_PASSWORD_BYTES
            )));
        }
        let mail = required_string("mail", dto.mail)
            .map_err(|_| AppError::BadRequest("Mail and password are required.".to_string()))?;

        Ok(Self {
            username: optional_string(dto.username),
            mail,
            password,
        })
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: Option<String>,
    pub mail: String,
    pub password_hash: String,
}

/// Validated profile edit input.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    /// ID of the user to update.
    pub id: i32,
    /// New username.
    pub username: String,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            username: required_string("username", dto.username)?,
        })
    }
}
