use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::ingredient::IngredientDto,
    server::{
        data::{ingredient::IngredientRepository, recipe_ingredient::RecipeIngredientRepository},
        error::{api::ApiError, Error},
        model::db::IngredientModel,
    },
};

static RESOURCE: &str = "Ingredient";

/// Service for managing ingredients.
pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    /// Creates a new instance of [`IngredientService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<IngredientModel>, Error> {
        Ok(IngredientRepository::new(self.db).get_all().await?)
    }

    /// Looks an ingredient up by name, `NotFound` if it does not exist
    pub async fn get(&self, name: &str) -> Result<IngredientModel, Error> {
        IngredientRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound {
                    resource: RESOURCE,
                    name: name.to_string(),
                }
                .into()
            })
    }

    /// Creates every ingredient in `ingredients` or none of them
    ///
    /// A name that already exists, or appears twice in the batch, fails the whole batch with
    /// `Duplicate`.
    pub async fn create_many(
        &self,
        ingredients: Vec<IngredientDto>,
    ) -> Result<Vec<IngredientModel>, Error> {
        let txn = self.db.begin().await?;

        let ingredient_repository = IngredientRepository::new(&txn);
        let mut created = Vec::with_capacity(ingredients.len());

        for ingredient in ingredients {
            if ingredient_repository
                .find_by_name(&ingredient.name)
                .await?
                .is_some()
            {
                return Err(ApiError::Duplicate {
                    resource: RESOURCE,
                    name: ingredient.name,
                }
                .into());
            }

            let model = ingredient_repository
                .create(&ingredient.name)
                .await
                .map_err(|e| ApiError::duplicate_or_db(e, RESOURCE, &ingredient.name))?;
            created.push(model);
        }

        txn.commit().await?;

        Ok(created)
    }

    /// Renames an ingredient, rolled back when the new name is taken
    pub async fn update(
        &self,
        existing: &IngredientModel,
        ingredient: IngredientDto,
    ) -> Result<IngredientModel, Error> {
        let txn = self.db.begin().await?;

        let updated = IngredientRepository::new(&txn)
            .rename(existing.id, &ingredient.name)
            .await
            .map_err(|e| ApiError::duplicate_or_db(e, RESOURCE, &ingredient.name))?
            .ok_or_else(|| ApiError::NotFound {
                resource: RESOURCE,
                name: existing.name.clone(),
            })?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes an ingredient and removes it from every recipe using it
    pub async fn delete(&self, ingredient: &IngredientModel) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        RecipeIngredientRepository::new(&txn)
            .delete_by_ingredient_id(ingredient.id)
            .await?;
        IngredientRepository::new(&txn).delete(ingredient.id).await?;

        txn.commit().await?;

        Ok(())
    }
}
