use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::{CreateUserDto, TokenDto, TokenRequestDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::util::{auth_user::AuthUser, payload::Payload},
        error::Error,
        model::app::AppState,
        service::{
            auth::AuthService,
            user::{user_dto, UserService},
        },
    },
};

pub static USER_TAG: &str = "user";

/// Register a new user
///
/// # Responses
/// - 201 (Created): The created user, without password
/// - 400 (Bad Request): Invalid email, duplicate email, or password shorter than 6 characters
/// - 500 (Internal Server Error): A database or password hashing error
#[utoipa::path(
    post,
    path = "/api/user/create",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid registration payload", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db, state.bcrypt_cost);

    let user = user_service.create_user(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Exchange email & password for an authentication token
///
/// Repeated calls for the same user return the same token.
///
/// # Responses
/// - 201 (Created): The user's token
/// - 400 (Bad Request): Missing fields or credentials that don't match an active user
/// - 500 (Internal Server Error): A database or password hashing error
#[utoipa::path(
    post,
    path = "/api/user/token",
    tag = USER_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 201, description = "Token issued", body = TokenDto),
        (status = 400, description = "Unable to authenticate with provided credentials", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_token(
    State(state): State<AppState>,
    Payload(payload): Payload<TokenRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, state.bcrypt_cost);

    let token = auth_service.create_token(payload).await?;

    Ok((StatusCode::CREATED, Json(TokenDto { token: token.key })))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = USER_TAG,
    security(("token" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(AuthUser(user): AuthUser) -> Result<impl IntoResponse, Error> {
    Ok((StatusCode::OK, Json(user_dto(user))))
}

/// Update the authenticated user's profile
///
/// Only the provided fields are changed, a new password is hashed before storage.
///
/// # Responses
/// - 200 (OK): The updated user
/// - 400 (Bad Request): Invalid email, email taken by another user, or password too short
/// - 401 (Unauthorized): Missing or invalid token
/// - 500 (Internal Server Error): A database or password hashing error
#[utoipa::path(
    patch,
    path = "/api/user/me",
    tag = USER_TAG,
    security(("token" = [])),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 400, description = "Invalid profile update", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Payload(payload): Payload<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db, state.bcrypt_cost);

    let user: UserDto = user_service.update_user(user.id, payload).await?;

    Ok((StatusCode::OK, Json(user)))
}
