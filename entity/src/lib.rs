//! SeaORM entity models for the recipe API database schema.

pub mod auth_token;
pub mod ingredient;
pub mod prelude;
pub mod user;
