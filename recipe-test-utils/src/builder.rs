//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and the queued tables and users are created
//! during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and user
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    include_user_tables: bool,
    include_recipe_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, String)>, // (email, password)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_user_tables: false,
            include_recipe_tables: false,
            users: Vec::new(),
        }
    }

    /// Add the tables required for accounts & token authentication.
    ///
    /// Creates the User and AuthToken tables.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the user tables along with every table owned by a user.
    ///
    /// Creates the User, AuthToken, and Ingredient tables.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_recipe_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_recipe_tables = true;
        self
    }

    /// Insert an active user into the database.
    ///
    /// Queues a user fixture to be inserted during `build()`. Requires the user tables.
    ///
    /// # Arguments
    /// - `email` - Email of the user
    /// - `password` - Plain text password, hashed during `build()`
    pub fn with_user(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.push((email.into(), password.into()));
        self
    }

    /// Build the test context.
    ///
    /// Creates the in-memory database, then the configured tables, then the queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Connecting, table creation, or fixture insertion failed
    /// - `Err(TestError::BcryptError)` - Hashing a fixture password failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::AuthToken),
            ]);
        }

        if self.include_recipe_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Ingredient));
        }

        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (email, password) in self.users {
            setup.user().insert_user(&email, &password).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
