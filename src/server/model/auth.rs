//! Login parameters and issued token model.

use crate::{
    model::auth::{TokenDto, TokenRequestDto},
    server::error::AppError,
};

/// Validated login input.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub mail: String,
    pub password: String,
}

impl LoginParams {
    /// Validates a login DTO.
    ///
    /// # Returns
    /// - `Ok(LoginParams)` - Mail and password present
    /// - `Err(AppError::BadRequest)` - Either field missing or empty
    pub fn from_dto(dto: TokenRequestDto) -> Result<Self, AppError> {
        match (dto.mail, dto.password) {
            (Some(mail), Some(password)) if !mail.trim().is_empty() && !password.is_empty() => {
                Ok(Self {
                    mail: mail.trim().to_string(),
                    password,
                })
            }
            _ => Err(AppError::BadRequest(
                "Mail and password are required.".to_string(),
            )),
        }
    }
}

/// A bearer token issued after successful authentication.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub user_id: i32,
}

impl IssuedToken {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            token: self.token,
            user_id: self.user_id,
        }
    }
}
