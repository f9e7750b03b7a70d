//! Extractors shared across controllers.
//!
//! This module provides the token-authenticated user extractor for protected endpoints and a
//! JSON or form body extractor whose rejections render through the application's error responses.

pub mod auth_user;
pub mod payload;
