use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Column changes applied by [`UserRepository::update`], `None` leaves a column untouched
#[derive(Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub name: Option<String>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    ///
    /// # Arguments
    /// - `email`: Normalized, unique email of the user
    /// - `password_hash`: bcrypt hash of the user's password
    /// - `name`: Display name, may be empty
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            name: ActiveValue::Set(name),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Finds a user by exact email match, callers normalize the email beforehand
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Applies `changes` to the user
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated user
    /// - `Ok(None)`: No user exists with the provided ID
    /// - `Err(DbErr)`: Database error, including unique email violations
    pub async fn update(
        &self,
        user_id: i32,
        changes: UserChanges,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user_am = user.clone().into_active_model();

        if let Some(email) = changes.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = changes.password_hash {
            user_am.password = ActiveValue::Set(password_hash);
        }
        if let Some(name) = changes.name {
            user_am.name = ActiveValue::Set(name);
        }

        // Nothing changed, skip the no-op UPDATE statement
        if !user_am.is_changed() {
            return Ok(Some(user));
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
