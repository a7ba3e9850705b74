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
        starship::{CreateStarshipDto, StarshipDto},
    },
    server::{
        error::AppError, model::starship::CreateStarshipParams, service::starship::StarshipService,
        state::AppState,
    },
};

/// Tag for grouping starship endpoints in OpenAPI documentation
pub static STARSHIP_TAG: &str = "starship";

/// Create a new starship.
///
/// # Returns
/// - `200 OK` - Created starship
/// - `400 Bad Request` - Name missing, negative measurement, or malformed JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/starship",
    tag = STARSHIP_TAG,
    request_body = CreateStarshipDto,
    responses(
        (status = 200, description = "Successfully created starship", body = StarshipDto),
        (status = 400, description = "Invalid starship data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_starship(
    State(state): State<AppState>,
    payload: Result<Json<CreateStarshipDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateStarshipParams::from_dto(payload)?;

    let service = StarshipService::new(&state.db);
    let starship = service.create(params).await?;

    Ok((StatusCode::OK, Json(starship.into_dto())))
}

/// List all starships.
#[utoipa::path(
    get,
    path = "/starship",
    tag = STARSHIP_TAG,
    responses(
        (status = 200, description = "All starships ordered by id", body = Vec<StarshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StarshipService::new(&state.db);
    let starships: Vec<StarshipDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|e| e.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(starships)))
}

/// Get a single starship.
///
/// # Returns
/// - `200 OK` - Starship found
/// - `404 Not Found` - No starship with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/starship/{starship_id}",
    tag = STARSHIP_TAG,
    params(
        ("starship_id" = i32, Path, description = "Starship ID")
    ),
    responses(
        (status = 200, description = "Starship found", body = StarshipDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(starship_id) = path?;
    let service = StarshipService::new(&state.db);
    let starship = service.get_by_id(starship_id).await?;

    Ok((StatusCode::OK, Json(starship.into_dto())))
}

/// Delete a starship.
///
/// Favorites pointing at the starship are removed with it.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No starship with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/starship/{starship_id}",
    tag = STARSHIP_TAG,
    params(
        ("starship_id" = i32, Path, description = "Starship ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted starship", body = MessageDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_starship(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(starship_id) = path?;
    let service = StarshipService::new(&state.db);
    service.delete(starship_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Starship deleted.".to_string(),
        }),
    ))
}
