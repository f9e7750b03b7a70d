//! HTTP controller endpoints for the recipe API.
//!
//! This module contains Axum handlers for account registration, token issuance, profile
//! management, and the authenticated user's ingredients. Controllers extract the request,
//! delegate to services, and map results onto HTTP responses. Handlers are annotated with
//! utoipa for OpenAPI documentation.

pub mod ingredient;
pub mod user;
pub mod util;
