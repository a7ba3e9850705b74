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
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        error::AppError, model::character::CreateCharacterParams,
        service::character::CharacterService, state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Create a new character.
///
/// # Returns
/// - `200 OK` - Created character
/// - `400 Bad Request` - Name missing, negative measurement, or malformed JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/character",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "Successfully created character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateCharacterParams::from_dto(payload)?;

    let service = CharacterService::new(&state.db);
    let character = service.create(params).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// List all characters.
#[utoipa::path(
    get,
    path = "/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters ordered by id", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CharacterService::new(&state.db);
    let characters: Vec<CharacterDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|e| e.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character.
///
/// # Returns
/// - `200 OK` - Character found
/// - `404 Not Found` - No character with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/character/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(character_id) = path?;
    let service = CharacterService::new(&state.db);
    let character = service.get_by_id(character_id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Delete a character.
///
/// Favorites pointing at the character are removed with it.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No character with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/character/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted character", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(character_id) = path?;
    let service = CharacterService::new(&state.db);
    service.delete(character_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Character deleted.".to_string(),
        }),
    ))
}
