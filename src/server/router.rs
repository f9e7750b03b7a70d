//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Registers the `token` security scheme referenced by protected endpoints
struct TokenSecurity;

impl Modify for TokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                Http::builder()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some(
                        "Key from `POST /api/user/token`, sent as `Authorization: Token <key>` or `Bearer <key>`",
                    ))
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document served alongside Swagger UI.
///
/// # Registered Endpoints
/// - `POST /api/user/create` - Register a new user
/// - `POST /api/user/token` - Exchange credentials for an authentication token
/// - `GET /api/user/me` - Get the authenticated user's profile
/// - `PATCH /api/user/me` - Update the authenticated user's profile
/// - `GET /api/recipe/ingredients` - List the authenticated user's ingredients
/// - `POST /api/recipe/ingredients` - Create an ingredient for the authenticated user
///
/// Other methods on these paths answer 405 Method Not Allowed.
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` with Swagger UI
/// served at `/api/docs`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, bcrypt_cost };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Recipe API", description = "Recipe management API"),
        modifiers(&TokenSecurity),
        tags(
            (name = controller::user::USER_TAG, description = "Account & authentication API routes"),
            (name = controller::ingredient::INGREDIENT_TAG, description = "Ingredient API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::user::create_token))
        .routes(routes!(controller::user::get_me, controller::user::update_me))
        .routes(routes!(
            controller::ingredient::list_ingredients,
            controller::ingredient::create_ingredient
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
