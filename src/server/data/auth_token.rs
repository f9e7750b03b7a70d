use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct AuthTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthTokenRepository<'a, C> {
    /// Creates a new instance of [`AuthTokenRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a new token `key` for the user
    ///
    /// Fails with a unique constraint violation if the user already has a token.
    pub async fn create(
        &self,
        user_id: i32,
        key: String,
    ) -> Result<entity::auth_token::Model, DbErr> {
        let token = entity::auth_token::ActiveModel {
            key: ActiveValue::Set(key),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        token.insert(self.db).await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::auth_token::Model>, DbErr> {
        entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Resolves a token key to the user it belongs to
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user owning the token
    /// - `Ok(None)`: The key is unknown
    /// - `Err(DbErr)`: Database error
    pub async fn find_user_by_key(&self, key: &str) -> Result<Option<entity::user::Model>, DbErr> {
        let result = entity::prelude::AuthToken::find_by_id(key.to_string())
            .find_also_related(entity::user::Entity)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| user))
    }
}
