use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn ingredient<'a>(&'a self) -> IngredientFixtures<'a> {
        IngredientFixtures { setup: self }
    }
}

pub struct IngredientFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> IngredientFixtures<'a> {
    pub async fn insert_ingredient(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<entity::ingredient::Model, TestError> {
        Ok(
            entity::prelude::Ingredient::insert(entity::ingredient::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Gets the ingredients stored for `user_id` in insertion order
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::ingredient::Model>, TestError> {
        Ok(entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::UserId.eq(user_id))
            .order_by_asc(entity::ingredient::Column::Id)
            .all(&self.setup.db)
            .await?)
    }
}
