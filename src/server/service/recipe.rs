use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::recipe::{NewRecipeDto, RecipeFieldsDto, RecipeIngredientDto},
    server::{
        data::{
            ingredient::IngredientRepository, recipe::RecipeRepository,
            recipe_ingredient::RecipeIngredientRepository, unit::UnitRepository,
        },
        error::{api::ApiError, Error},
        model::db::{RecipeModel, UserModel},
    },
};

static RESOURCE: &str = "Recipe";
static LINE_RESOURCE: &str = "Recipe ingredient";

/// Service for managing the recipes of a user and their ingredient lines.
pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of [`RecipeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the recipes owned by `owner`
    pub async fn list(&self, owner: &UserModel) -> Result<Vec<RecipeModel>, Error> {
        Ok(RecipeRepository::new(self.db)
            .get_by_user_id(owner.id)
            .await?)
    }

    /// Looks a recipe up by name among the recipes of `owner`
    ///
    /// # Returns
    /// - `Ok(RecipeModel)` - The recipe
    /// - `Err(Error::ApiError(ApiError::NotFound))` - `owner` has no recipe named `name`
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, owner: &UserModel, name: &str) -> Result<RecipeModel, Error> {
        RecipeRepository::new(self.db)
            .find_by_user_and_name(owner.id, name)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound {
                    resource: RESOURCE,
                    name: name.to_string(),
                }
                .into()
            })
    }

    /// Resolves the ingredient lines of a recipe into names
    pub async fn ingredients(
        &self,
        recipe: &RecipeModel,
    ) -> Result<Vec<RecipeIngredientDto>, Error> {
        let lines = RecipeIngredientRepository::new(self.db)
            .get_by_recipe_id(recipe.id)
            .await?;

        let ingredient_names: HashMap<i32, String> = IngredientRepository::new(self.db)
            .get_many_by_ids(lines.iter().map(|line| line.ingredient_id).collect())
            .await?
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient.name))
            .collect();
        let unit_names: HashMap<i32, String> = UnitRepository::new(self.db)
            .get_many_by_ids(lines.iter().map(|line| line.unit_id).collect())
            .await?
            .into_iter()
            .map(|unit| (unit.id, unit.name))
            .collect();

        lines
            .into_iter()
            .map(|line| -> Result<RecipeIngredientDto, Error> {
                let name = ingredient_names.get(&line.ingredient_id).ok_or_else(|| {
                    Error::InternalError(format!(
                        "Ingredient ID {} of recipe {} does not exist",
                        line.ingredient_id, recipe.name
                    ))
                })?;
                let unit = unit_names.get(&line.unit_id).ok_or_else(|| {
                    Error::InternalError(format!(
                        "Unit ID {} of recipe {} does not exist",
                        line.unit_id, recipe.name
                    ))
                })?;

                Ok(RecipeIngredientDto {
                    name: name.clone(),
                    amount: line.amount,
                    unit: unit.clone(),
                })
            })
            .collect()
    }

    /// Creates a recipe for `owner` along with its ingredient lines
    ///
    /// Ingredients and units that do not exist yet are created. Everything happens in one
    /// transaction; a duplicate recipe name or a repeated ingredient/unit pair rolls it all
    /// back.
    pub async fn create(
        &self,
        owner: &UserModel,
        new_recipe: NewRecipeDto,
    ) -> Result<RecipeModel, Error> {
        let name = new_recipe.recipe.name.clone();

        let txn = self.db.begin().await?;

        let recipe = RecipeRepository::new(&txn)
            .create(owner.id, new_recipe.recipe)
            .await
            .map_err(|e| ApiError::duplicate_or_db(e, RESOURCE, &name))?;

        let ingredient_repository = IngredientRepository::new(&txn);
        let unit_repository = UnitRepository::new(&txn);
        let line_repository = RecipeIngredientRepository::new(&txn);

        for (position, line) in new_recipe.ingredients.into_iter().enumerate() {
            let ingredient = ingredient_repository.get_or_create(&line.name).await?;
            let unit = unit_repository.get_or_create(&line.unit).await?;

            line_repository
                .create(recipe.id, ingredient.id, unit.id, line.amount, position as i32)
                .await
                .map_err(|e| {
                    ApiError::duplicate_or_db(
                        e,
                        LINE_RESOURCE,
                        &format!("{} ({})", line.name, line.unit),
                    )
                })?;
        }

        txn.commit().await?;

        Ok(recipe)
    }

    /// Replaces the editable fields of a recipe, rolled back on a name collision
    pub async fn update(
        &self,
        existing: &RecipeModel,
        recipe: RecipeFieldsDto,
    ) -> Result<RecipeModel, Error> {
        let name = recipe.name.clone();

        let txn = self.db.begin().await?;

        let updated = RecipeRepository::new(&txn)
            .update(existing.id, recipe)
            .await
            .map_err(|e| ApiError::duplicate_or_db(e, RESOURCE, &name))?
            .ok_or_else(|| ApiError::NotFound {
                resource: RESOURCE,
                name: existing.name.clone(),
            })?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a recipe and its ingredient lines
    pub async fn delete(&self, recipe: &RecipeModel) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        RecipeIngredientRepository::new(&txn)
            .delete_by_recipe_ids(vec![recipe.id])
            .await?;
        RecipeRepository::new(&txn).delete(recipe.id).await?;

        txn.commit().await?;

        Ok(())
    }
}
