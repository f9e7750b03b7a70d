//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organized by
//! domain: user accounts, their authentication tokens, and recipe ingredients.

pub mod auth_token;
pub mod ingredient;
pub mod user;
