//! Tests for database startup against a freshly migrated schema.

use recipe_api::server::{
    config::Config,
    data::{auth_token::AuthTokenRepository, ingredient::IngredientRepository, user::UserRepository},
    startup::connect_to_database,
};
use recipe_test_utils::prelude::*;

fn sqlite_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        bcrypt_cost: 4,
    }
}

/// Expect migrations to create every table the repositories use
#[tokio::test]
async fn migrations_create_schema() -> Result<(), TestError> {
    let db = connect_to_database(&sqlite_config()).await.unwrap();

    let user = UserRepository::new(&db)
        .create(
            "test@claiborne.com".to_string(),
            "hash".to_string(),
            String::new(),
        )
        .await?;
    let token = AuthTokenRepository::new(&db)
        .create(user.id, "a".repeat(40))
        .await?;
    let ingredient = IngredientRepository::new(&db)
        .create(user.id, "Cabbage".to_string())
        .await?;

    assert_eq!(token.user_id, user.id);
    assert_eq!(ingredient.user_id, user.id);

    Ok(())
}

/// Expect the unique email constraint to be enforced by the migrated schema
#[tokio::test]
async fn migrations_enforce_unique_email() -> Result<(), TestError> {
    let db = connect_to_database(&sqlite_config()).await.unwrap();
    let user_repository = UserRepository::new(&db);

    user_repository
        .create(
            "test@claiborne.com".to_string(),
            "hash".to_string(),
            String::new(),
        )
        .await?;
    let result = user_repository
        .create(
            "test@claiborne.com".to_string(),
            "hash".to_string(),
            String::new(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
