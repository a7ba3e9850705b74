//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{routing::get, Router};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /users`, `GET /users` - Signup and user listing
/// - `GET /users/{user_id}`, `PUT /users/{user_id}` - Read and rename a user
/// - `POST /token` - Exchange mail and password for a bearer token
/// - `GET /protected` - Check a bearer token
/// - `/character`, `/planet`, `/starship` - Catalog create/list, plus get/delete by id
/// - `GET /favorites/{user_id}` - List a user's favorites
/// - `POST/DELETE /favorites/{character,planet,starship}` - Add or remove a favorite
///
/// Legacy paths `GET /planets/{planet_id}`, `/ships`, and `/ships/{starship_id}` are served
/// by the same handlers but left out of the OpenAPI document.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes and Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Holocron", description = "Star Wars catalog and favorites API"),
        modifiers(&BearerAuth),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Token issuing and verification"),
            (name = controller::user::USER_TAG, description = "User accounts"),
            (name = controller::character::CHARACTER_TAG, description = "Character catalog"),
            (name = controller::planet::PLANET_TAG, description = "Planet catalog"),
            (name = controller::starship::STARSHIP_TAG, description = "Starship catalog"),
            (name = controller::favorite::FAVORITE_TAG, description = "User favorites"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::create_user,
            controller::user::get_users
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user
        ))
        .routes(routes!(controller::auth::get_token))
        .routes(routes!(controller::auth::protected))
        .routes(routes!(
            controller::character::create_character,
            controller::character::get_characters
        ))
        .routes(routes!(
            controller::character::get_character,
            controller::character::delete_character
        ))
        .routes(routes!(
            controller::planet::create_planet,
            controller::planet::get_planets
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::starship::create_starship,
            controller::starship::get_starships
        ))
        .routes(routes!(
            controller::starship::get_starship,
            controller::starship::delete_starship
        ))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_starship,
            controller::favorite::remove_favorite_starship
        ))
        .split_for_parts();

    routes
        .route("/planets/{planet_id}", get(controller::planet::get_planet))
        .route(
            "/ships",
            get(controller::starship::get_starships).post(controller::starship::create_starship),
        )
        .route(
            "/ships/{starship_id}",
            get(controller::starship::get_starship).delete(controller::starship::delete_starship),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
