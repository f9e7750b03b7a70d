use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Token authentication failures on protected routes, all answered with 401.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication credentials were not provided.")]
    MissingCredentials,
    #[error("Invalid token header.")]
    InvalidHeader,
    #[error("Invalid token.")]
    InvalidToken,
    #[error("User inactive or deleted.")]
    UserInactive(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            Self::UserInactive(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);
            }
            _ => tracing::debug!("{}", self),
        }

        (
            StatusCode::UNAUTHORIZED,
            [(axum::http::header::WWW_AUTHENTICATE, "Token")],
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
