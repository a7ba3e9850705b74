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
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{RegisterUserParams, UpdateUserParams},
        service::{auth::CredentialService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// Creates an account from a mail address and password, optionally with a username.
/// The password is stored as a bcrypt hash and never returned.
///
/// # Arguments
/// - `state` - Application state containing the database connection and bcrypt cost
/// - `payload` - Signup data (username, mail, password)
///
/// # Returns
/// - `200 OK` - Created user's public fields
/// - `400 Bad Request` - Mail or password missing, or malformed JSON
/// - `409 Conflict` - Mail or username already in use
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Mail or password missing", body = ErrorDto),
        (status = 409, description = "Mail or username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = RegisterUserParams::from_dto(payload)?;

    let service = CredentialService::new(&state.db, &state.tokens, state.bcrypt_cost);
    let user = service.register(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List all users.
///
/// # Returns
/// - `200 OK` - Every user ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);
    let users: Vec<UserDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Get a single user.
///
/// # Returns
/// - `200 OK` - User's public fields
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path?;
    let service = UserService::new(&state.db);
    let user = service.get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user's username.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user to update
/// - `payload` - New username
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Username missing or blank
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - Username held by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Username missing", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path?;
    let Json(payload) = payload?;
    let params = UpdateUserParams::from_dto(user_id, payload)?;

    let service = UserService::new(&state.db);
    let user = service.update(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
