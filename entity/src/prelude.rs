pub use super::auth_token::Entity as AuthToken;
pub use super::ingredient::Entity as Ingredient;
pub use super::user::Entity as User;
