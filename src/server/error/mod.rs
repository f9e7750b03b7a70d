//! Error types for the recipe API server.
//!
//! This module provides the error handling system for the server with specialized error types
//! for authentication, configuration, and payload validation. All errors implement `IntoResponse`
//! for Axum HTTP responses and use `thiserror` for ergonomic error definitions with automatic
//! `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Main error type for the recipe API server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (missing, malformed, or unknown tokens)
/// - Validation errors (field-level payload problems, bad credentials)
/// - External library errors (database, password hashing, blocking tasks, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (token header missing, malformed, or not recognised).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request payload failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Request body was not valid JSON for the expected payload.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Request body was not a valid form-encoded payload.
    #[error(transparent)]
    FormRejection(#[from] FormRejection),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing or verification failure.
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
    /// A blocking task panicked or was cancelled.
    #[error(transparent)]
    TaskJoinError(#[from] tokio::task::JoinError),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Most errors are treated as internal server errors (500) with logging, while client
/// correctable errors have their own response mappings.
///
/// # Returns
/// - 400 Bad Request - For validation failures and malformed JSON or form bodies
/// - 401 Unauthorized - For missing or invalid authentication tokens
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: rejection.body_text(),
                    }),
                )
                    .into_response()
            }
            Self::FormRejection(rejection) => {
                tracing::debug!("Rejected form body: {}", rejection.body_text());

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: rejection.body_text(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
