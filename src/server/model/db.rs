//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so services and controllers don't need to import from
//! the `entity` crate directly.

/// Type alias for the user account database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Unique login email, domain part lowercased
/// - `password` - bcrypt hash of the password
/// - `name` - Display name, empty when not provided
/// - `is_active` - Inactive users can neither obtain nor use tokens
/// - `created_at` - Timestamp when the account was registered
pub type UserModel = entity::user::Model;

/// Type alias for the authentication token database model.
///
/// Each user has at most one token, created on first successful login.
pub type AuthTokenModel = entity::auth_token::Model;

/// Type alias for the ingredient database model, owned by exactly one user.
pub type IngredientModel = entity::ingredient::Model;
