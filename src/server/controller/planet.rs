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
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        error::AppError, model::planet::CreatePlanetParams, service::planet::PlanetService,
        state::AppState,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// Create a new planet.
///
/// # Returns
/// - `200 OK` - Created planet
/// - `400 Bad Request` - Name missing, negative measurement, or malformed JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/planet",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "Successfully created planet", body = PlanetDto),
        (status = 400, description = "Invalid planet data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreatePlanetParams::from_dto(payload)?;

    let service = PlanetService::new(&state.db);
    let planet = service.create(params).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// List all planets.
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets ordered by id", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PlanetService::new(&state.db);
    let planets: Vec<PlanetDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|e| e.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet.
///
/// # Returns
/// - `200 OK` - Planet found
/// - `404 Not Found` - No planet with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(planet_id) = path?;
    let service = PlanetService::new(&state.db);
    let planet = service.get_by_id(planet_id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Delete a planet.
///
/// Favorites pointing at the planet are removed with it.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No planet with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted planet", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(planet_id) = path?;
    let service = PlanetService::new(&state.db);
    service.delete(planet_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Planet deleted.".to_string(),
        }),
    ))
}
