//! Database fixtures created during test execution.
//!
//! - `user` - Users & their authentication tokens
//! - `ingredient` - Ingredients owned by a user

pub mod ingredient;
pub mod user;
