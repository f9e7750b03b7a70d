use sea_orm::DatabaseConnection;

use crate::{
    model::ingredient::{CreateIngredientDto, IngredientDto},
    server::{
        data::ingredient::IngredientRepository,
        error::{
            validation::{ValidationError, BLANK_FIELD, REQUIRED_FIELD},
            Error,
        },
        model::db::IngredientModel,
    },
};

/// Maximum ingredient name length in characters, matching the column size.
pub const MAX_NAME_LENGTH: usize = 255;

/// Service for ingredients scoped to their owning user.
pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    /// Creates a new instance of IngredientService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the ingredients owned by `user_id`, ordered by name descending.
    pub async fn get_user_ingredients(&self, user_id: i32) -> Result<Vec<IngredientDto>, Error> {
        let ingredient_repository = IngredientRepository::new(self.db);

        let ingredients = ingredient_repository.get_many_by_user_id(user_id).await?;

        Ok(ingredients.into_iter().map(ingredient_dto).collect())
    }

    /// Creates an ingredient owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(IngredientDto)` - The created ingredient
    /// - `Err(Error::ValidationError)` - Name missing, blank, or longer than [`MAX_NAME_LENGTH`]
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_ingredient(
        &self,
        user_id: i32,
        payload: CreateIngredientDto,
    ) -> Result<IngredientDto, Error> {
        let name = match payload.name.as_deref().map(str::trim) {
            None => return Err(ValidationError::field("name", REQUIRED_FIELD).into()),
            Some("") => return Err(ValidationError::field("name", BLANK_FIELD).into()),
            Some(name) if name.chars().count() > MAX_NAME_LENGTH => {
                return Err(ValidationError::field(
                    "name",
                    format!(
                        "Ensure this field has no more than {} characters.",
                        MAX_NAME_LENGTH
                    ),
                )
                .into());
            }
            Some(name) => name.to_string(),
        };

        let ingredient_repository = IngredientRepository::new(self.db);
        let ingredient = ingredient_repository.create(user_id, name).await?;

        tracing::debug!(
            user_id = %user_id,
            ingredient_id = %ingredient.id,
            "Created ingredient"
        );

        Ok(ingredient_dto(ingredient))
    }
}

fn ingredient_dto(ingredient: IngredientModel) -> IngredientDto {
    IngredientDto {
        id: ingredient.id,
        name: ingredient.name,
    }
}
