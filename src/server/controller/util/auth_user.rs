use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel},
    service::auth::AuthService,
};

/// Authorization schemes accepted in front of the token key, compared case-insensitively
const TOKEN_SCHEMES: [&str; 2] = ["token", "bearer"];

/// The active user resolved from the request's `Authorization: Token <key>` header
///
/// Adding this extractor to a handler makes the route require authentication, failed
/// extraction responds with 401.
pub struct AuthUser(pub UserModel);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingCredentials.into());
        };

        let header = header.to_str().map_err(|_| AuthError::InvalidHeader)?;
        let key = parse_token_key(header)?;

        let user = AuthService::new(&state.db, state.bcrypt_cost)
            .authenticate(key)
            .await?;

        Ok(AuthUser(user))
    }
}

/// Extracts the token key from an `Authorization` header value
///
/// Expects exactly a known scheme followed by a single key.
fn parse_token_key(header: &str) -> Result<&str, AuthError> {
    let mut parts = header.split_whitespace();

    let scheme = parts.next().ok_or(AuthError::InvalidHeader)?;
    if !TOKEN_SCHEMES
        .iter()
        .any(|known| scheme.eq_ignore_ascii_case(known))
    {
        return Err(AuthError::InvalidHeader);
    }

    match (parts.next(), parts.next()) {
        (Some(key), None) => Ok(key),
        _ => Err(AuthError::InvalidHeader),
    }
}
