//! Wire-format types shared by the HTTP API.
//!
//! These DTOs define the JSON request and response bodies of every endpoint and are
//! registered as OpenAPI schemas through utoipa.

pub mod api;
pub mod ingredient;
pub mod user;
