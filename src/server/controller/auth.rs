use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{TokenDto, TokenRequestDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::auth::LoginParams,
        service::auth::CredentialService, state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange mail and password for a bearer token.
///
/// Unknown mail addresses and wrong passwords produce the same response.
///
/// # Returns
/// - `200 OK` - Signed token and the user's id
/// - `400 Bad Request` - Mail or password missing
/// - `401 Unauthorized` - Invalid mail or password
/// - `500 Internal Server Error` - Database, hashing, or signing error
#[utoipa::path(
    post,
    path = "/token",
    tag = AUTH_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 200, description = "Successfully authenticated", body = TokenDto),
        (status = 400, description = "Mail or password missing", body = ErrorDto),
        (status = 401, description = "Invalid mail or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_token(
    State(state): State<AppState>,
    payload: Result<Json<TokenRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = LoginParams::from_dto(payload)?;

    let service = CredentialService::new(&state.db, &state.tokens, state.bcrypt_cost);
    let issued = service.authenticate(params).await?;

    Ok((StatusCode::OK, Json(issued.into_dto())))
}

/// Check whether a bearer token belongs to an existing user.
///
/// # Returns
/// - `200 OK` - `true` if the token's user exists, `false` if it has been removed
/// - `401 Unauthorized` - Token missing, malformed, expired, or badly signed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/protected",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Whether the token's user exists", body = bool),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn protected(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    let user = guard.current_user().await?;

    Ok((StatusCode::OK, Json(user.is_some())))
}
