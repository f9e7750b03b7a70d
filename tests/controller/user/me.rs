//! Tests for the authenticated user's profile endpoints.
//!
//! Verifies profile retrieval & partial updates for authenticated users, 401 responses for
//! missing or invalid tokens, and that only GET & PATCH are routed.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use recipe_api::{
    model::user::UpdateUserDto,
    server::controller::{
        user::{get_me, update_me},
        util::{auth_user::AuthUser, payload::Payload},
    },
};
use serde_json::json;
use tower::ServiceExt;

use crate::util::{read_json, request};

use super::*;

/// Tests profile retrieval for the authenticated user.
///
/// Expected: 200 OK with email & name
#[tokio::test]
async fn returns_profile_for_authenticated_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;

    let result = get_me(AuthUser(user_model)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body, json!({ "email": "test@claiborne.com", "name": "" }));

    Ok(())
}

/// Tests that the profile requires a token.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn returns_unauthorized_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let req = request(Method::GET, "/api/user/me", None, None);
    let resp = test.into_router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(resp).await;
    assert_eq!(body["error"], "Authentication credentials were not provided.");

    Ok(())
}

/// Tests that an unknown token is rejected.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn returns_unauthorized_for_invalid_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let req = request(Method::GET, "/api/user/me", Some("Token not-a-real-token"), None);
    let resp = test.into_router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(resp).await;
    assert_eq!(body["error"], "Invalid token.");

    Ok(())
}

/// Tests that a malformed Authorization header is rejected.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn returns_unauthorized_for_malformed_header() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let req = request(Method::GET, "/api/user/me", Some("Token"), None);
    let resp = test.into_router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(resp).await;
    assert_eq!(body["error"], "Invalid token header.");

    Ok(())
}

/// Tests that tokens of deactivated users are rejected.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn returns_unauthorized_for_inactive_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_inactive_user("test@claiborne.com", "testpass123")
        .await?;
    let token_model = test.user().insert_token(user_model.id).await?;

    let authorization = format!("Token {}", token_model.key);
    let req = request(Method::GET, "/api/user/me", Some(&authorization), None);
    let resp = test.into_router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(resp).await;
    assert_eq!(body["error"], "User inactive or deleted.");

    Ok(())
}

/// Tests profile retrieval through the router with both accepted schemes.
///
/// Expected: 200 OK
#[tokio::test]
async fn returns_profile_through_router() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;
    let token_model = test.user().insert_token(user_model.id).await?;

    for scheme in ["Token", "Bearer"] {
        let authorization = format!("{} {}", scheme, token_model.key);
        let req = request(Method::GET, "/api/user/me", Some(&authorization), None);
        let resp = test.into_router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_json(resp).await;
        assert_eq!(body["email"], "test@claiborne.com");
    }

    Ok(())
}

/// Tests that POST is not routed for the profile.
///
/// Expected: 405 Method Not Allowed
#[tokio::test]
async fn rejects_post_method() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;
    let token_model = test.user().insert_token(user_model.id).await?;

    let authorization = format!("Token {}", token_model.key);
    let req = request(Method::POST, "/api/user/me", Some(&authorization), Some(json!({})));
    let resp = test.into_router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}

/// Tests a partial update of name & password.
///
/// Expected: 200 OK with the new name, and the stored hash verifying the new password
#[tokio::test]
async fn updates_name_and_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;

    let result = update_me(
        State(test.into_app_state()),
        AuthUser(user_model),
        Payload(UpdateUserDto {
            name: Some("Updated Name".to_string()),
            password: Some("newpassword123".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["name"], "Updated Name");
    assert_eq!(body["email"], "test@claiborne.com");

    let stored = test
        .user()
        .get_by_email("test@claiborne.com")
        .await?
        .unwrap();
    assert_eq!(stored.name, "Updated Name");
    assert!(bcrypt::verify("newpassword123", &stored.password)?);

    Ok(())
}

/// Tests that an update with a short password changes nothing.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn fails_update_for_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;

    let result = update_me(
        State(test.into_app_state()),
        AuthUser(user_model.clone()),
        Payload(UpdateUserDto {
            name: Some("Updated Name".to_string()),
            password: Some("pw".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = test
        .user()
        .get_by_email("test@claiborne.com")
        .await?
        .unwrap();
    assert_eq!(stored, user_model);

    Ok(())
}

/// Tests a profile update through the router.
///
/// Expected: 200 OK
#[tokio::test]
async fn updates_profile_through_router() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;
    let token_model = test.user().insert_token(user_model.id).await?;

    let authorization = format!("Token {}", token_model.key);
    let req = request(
        Method::PATCH,
        "/api/user/me",
        Some(&authorization),
        Some(json!({ "name": "Updated Name" })),
    );
    let resp = test.into_router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["name"], "Updated Name");

    Ok(())
}

/// Tests that an update never touches another user's record.
///
/// Expected: 200 OK for the caller, other user unchanged
#[tokio::test]
async fn update_only_changes_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;
    let other_user = test
        .user()
        .insert_user("other@claiborne.com", "testpass123")
        .await?;

    let result = update_me(
        State(test.into_app_state()),
        AuthUser(user_model),
        Payload(UpdateUserDto {
            name: Some("Updated Name".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());

    let stored_other = test
        .user()
        .get_by_email("other@claiborne.com")
        .await?
        .unwrap();
    assert_eq!(stored_other, other_user);

    Ok(())
}

/// Tests that the email cannot be changed to one belonging to another user.
///
/// Expected: 400 Bad Request with an error for the email field
#[tokio::test]
async fn fails_update_for_email_of_other_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("test@claiborne.com", "testpass123")
        .await?;
    test.user()
        .insert_user("other@claiborne.com", "testpass123")
        .await?;

    let result = update_me(
        State(test.into_app_state()),
        AuthUser(user_model),
        Payload(UpdateUserDto {
            email: Some("other@claiborne.com".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = read_json(resp).await;
    assert_eq!(body["fields"]["email"][0], "user with this email already exists.");

    Ok(())
}
