use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteDto, FavoriteRequestDto, FavoritesDto},
    },
    server::{
        error::AppError,
        model::favorite::{FavoriteKind, FavoriteParams},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// List every favorite of a user.
///
/// # Returns
/// - `200 OK` - Character, planet, and starship ids, each in the order they were added
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/favorites/{user_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User's favorites grouped by kind", body = FavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path?;
    let service = FavoriteService::new(&state.db);
    let favorites = service.list(user_id).await?;

    Ok((StatusCode::OK, Json(favorites.into_dto())))
}

/// Add a character to a user's favorites.
///
/// The character may be sent as `target_id` or `character_id`.
///
/// # Returns
/// - `200 OK` - Created favorite
/// - `400 Bad Request` - `user_id` or `character_id` missing
/// - `404 Not Found` - User or character does not exist
/// - `409 Conflict` - Character already a favorite of this user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorites/character",
    tag = FAVORITE_TAG,
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Successfully added favorite character", body = FavoriteDto),
        (status = 400, description = "Missing user or character id", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, FavoriteKind::Character, payload).await
}

/// Remove a character from a user's favorites.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - `user_id` or `character_id` missing
/// - `404 Not Found` - User does not exist or has no such favorite
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorites/character",
    tag = FAVORITE_TAG,
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Successfully removed favorite character", body = MessageDto),
        (status = 400, description = "Missing user or character id", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, FavoriteKind::Character, payload).await
}

/// Add a planet to a user's favorites.
///
/// The planet may be sent as `target_id` or `planet_id`.
///
/// # Returns
/// - `200 OK` - Created favorite
/// - `400 Bad Request` - `user_id` or `planet_id` missing
/// - `404 Not Found` - User or planet does not exist
/// - `409 Conflict` - Planet already a favorite of this user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorites/planet",
    tag = FAVORITE_TAG,
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Successfully added favorite planet", body = FavoriteDto),
        (status = 400, description = "Missing user or planet id", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, FavoriteKind::Planet, payload).await
}

/// Remove a planet from a user's favorites.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - `user_id` or `planet_id` missing
/// - `404 Not Found` - User does not exist or has no such favorite
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorites/planet",
    tag = FAVORITE_TAG,
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Successfully removed favorite planet", body = MessageDto),
        (status = 400, description = "Missing user or planet id", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, FavoriteKind::Planet, payload).await
}

/// Add a starship to a user's favorites.
///
/// The starship may be sent as `target_id` or `starship_id`.
///
/// # Returns
/// - `200 OK` - Created favorite
/// - `400 Bad Request` - `user_id` or `starship_id` missing
/// - `404 Not Found` - User or starship does not exist
/// - `409 Conflict` - Starship already a favorite of this user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorites/starship",
    tag = FAVORITE_TAG,
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Successfully added favorite starship", body = FavoriteDto),
        (status = 400, description = "Missing user or starship id", body = ErrorDto),
        (status = 404, description = "User or starship not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_starship(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, FavoriteKind::Starship, payload).await
}

/// Remove a starship from a user's favorites.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - `user_id` or `starship_id` missing
/// - `404 Not Found` - User does not exist or has no such favorite
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorites/starship",
    tag = FAVORITE_TAG,
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Successfully removed favorite starship", body = MessageDto),
        (status = 400, description = "Missing user or starship id", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_starship(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, FavoriteKind::Starship, payload).await
}

async fn add(
    state: &AppState,
    kind: FavoriteKind,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteDto>), AppError> {
    let Json(payload) = payload?;
    let params = FavoriteParams::from_dto(kind, payload)?;

    let service = FavoriteService::new(&state.db);
    let favorite = service.add(params).await?;

    Ok((StatusCode::OK, Json(favorite.into_dto())))
}

async fn remove(
    state: &AppState,
    kind: FavoriteKind,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    let Json(payload) = payload?;
    let params = FavoriteParams::from_dto(kind, payload)?;

    let service = FavoriteService::new(&state.db);
    service.remove(params).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Favorite {} deleted successfully.", kind),
        }),
    ))
}
