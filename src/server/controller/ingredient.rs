use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        ingredient::{CreateIngredientDto, IngredientDto},
    },
    server::{
        controller::util::{auth_user::AuthUser, payload::Payload},
        error::Error,
        model::app::AppState,
        service::ingredient::IngredientService,
    },
};

pub static INGREDIENT_TAG: &str = "ingredient";

/// List the authenticated user's ingredients, ordered by name descending
#[utoipa::path(
    get,
    path = "/api/recipe/ingredients",
    tag = INGREDIENT_TAG,
    security(("token" = [])),
    responses(
        (status = 200, description = "Ingredients owned by the user", body = Vec<IngredientDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let ingredient_service = IngredientService::new(&state.db);

    let ingredients = ingredient_service.get_user_ingredients(user.id).await?;

    Ok((StatusCode::OK, Json(ingredients)))
}

/// Create an ingredient owned by the authenticated user
///
/// # Responses
/// - 201 (Created): The created ingredient
/// - 400 (Bad Request): Name missing, blank, or longer than 255 characters
/// - 401 (Unauthorized): Missing or invalid token
/// - 500 (Internal Server Error): A database error
#[utoipa::path(
    post,
    path = "/api/recipe/ingredients",
    tag = INGREDIENT_TAG,
    security(("token" = [])),
    request_body = CreateIngredientDto,
    responses(
        (status = 201, description = "Ingredient created", body = IngredientDto),
        (status = 400, description = "Invalid ingredient", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Payload(payload): Payload<CreateIngredientDto>,
) -> Result<impl IntoResponse, Error> {
    let ingredient_service = IngredientService::new(&state.db);

    let ingredient = ingredient_service.create_ingredient(user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(ingredient)))
}
