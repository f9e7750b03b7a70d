//! Tests for the list_ingredients endpoint.
//!
//! Verifies that users only see their own ingredients, ordered by name descending, and that
//! the endpoint requires authentication.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use recipe_api::server::controller::{
    ingredient::list_ingredients, util::auth_user::AuthUser,
};
use serde_json::json;
use tower::ServiceExt;

use crate::util::{read_json, request};

use super::*;

/// Tests listing the authenticated user's ingredients.
///
/// Expected: 200 OK with the user's ingredients by name descending
#[tokio::test]
async fn lists_ingredients_by_name_descending() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;
    let kale = test
        .ingredient()
        .insert_ingredient(user_model.id, "Kale")
        .await?;
    let salt = test
        .ingredient()
        .insert_ingredient(user_model.id, "Salt")
        .await?;

    let result = list_ingredients(State(test.into_app_state()), AuthUser(user_model)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(
        body,
        json!([
            { "id": salt.id, "name": "Salt" },
            { "id": kale.id, "name": "Kale" },
        ])
    );

    Ok(())
}

/// Tests that ingredients of other users are excluded.
///
/// Expected: 200 OK with only the caller's ingredient
#[tokio::test]
async fn excludes_other_users_ingredients() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;
    let other_user = test
        .user()
        .insert_user("other@claiborne.com", "testpass123")
        .await?;
    test.ingredient()
        .insert_ingredient(other_user.id, "Vinegar")
        .await?;
    let ingredient = test
        .ingredient()
        .insert_ingredient(user_model.id, "Tumeric")
        .await?;

    let resp = list_ingredients(State(test.into_app_state()), AuthUser(user_model))
        .await
        .unwrap()
        .into_response();

    let body = read_json(resp).await;
    assert_eq!(body, json!([{ "id": ingredient.id, "name": "Tumeric" }]));

    Ok(())
}

/// Tests that listing requires a token.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn returns_unauthorized_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let req = request(Method::GET, "/api/recipe/ingredients", None, None);
    let resp = test.into_router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests listing through the router.
///
/// Expected: 200 OK with an empty list for a user without ingredients
#[tokio::test]
async fn lists_empty_through_router() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;
    let token_model = test.user().insert_token(user_model.id).await?;

    let authorization = format!("Token {}", token_model.key);
    let req = request(Method::GET, "/api/recipe/ingredients", Some(&authorization), None);
    let resp = test.into_router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!([]));

    Ok(())
}

/// Tests that the ingredient table being absent surfaces as a server error.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;

    let result = list_ingredients(State(test.into_app_state()), AuthUser(user_model)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
