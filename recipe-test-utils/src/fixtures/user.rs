use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts an active user with `password` hashed at the test bcrypt cost
    pub async fn insert_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        self.insert(email, password, true).await
    }

    /// Inserts a deactivated user, tokens & logins for it must be rejected
    pub async fn insert_inactive_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        self.insert(email, password, false).await
    }

    /// Inserts an authentication token for `user_id`
    ///
    /// The key is derived from the user ID so it stays unique across users in a test.
    pub async fn insert_token(&self, user_id: i32) -> Result<entity::auth_token::Model, TestError> {
        Ok(
            entity::prelude::AuthToken::insert(entity::auth_token::ActiveModel {
                key: ActiveValue::Set(format!("{:040x}", user_id)),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, TestError> {
        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.setup.db)
            .await?)
    }

    async fn insert(
        &self,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> Result<entity::user::Model, TestError> {
        let password_hash = bcrypt::hash(password, self.setup.bcrypt_cost)?;

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set(password_hash),
                name: ActiveValue::Set(String::new()),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
