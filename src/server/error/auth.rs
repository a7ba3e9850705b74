use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Mail or password did not match a stored account.
    ///
    /// Raised both for unknown mail addresses and for wrong passwords so that the
    /// response does not reveal which accounts exist.
    #[error("Invalid mail or password")]
    InvalidCredentials,

    /// The request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token is malformed, expired, or carries a bad signature.
    ///
    /// # Fields
    /// - Reason reported by the token decoder, logged but not returned to the client
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized. Token decoding details are logged at debug
/// level while the client only receives a generic message.
///
/// # Returns
/// - 401 Unauthorized - For every authentication error
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid mail or password",
            Self::MissingToken => "Missing bearer token",
            Self::InvalidToken(_) => "Invalid or expired token",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
