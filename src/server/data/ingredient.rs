use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::IngredientModel;

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    /// Creates a new instance of [`IngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<IngredientModel>, DbErr> {
        entity::prelude::Ingredient::find()
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<IngredientModel>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Creates an ingredient, failing with a unique constraint violation if the name is taken
    pub async fn create(&self, name: &str) -> Result<IngredientModel, DbErr> {
        let ingredient = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        ingredient.insert(self.db).await
    }

    /// Returns the ingredient named `name`, creating it first if it does not exist
    pub async fn get_or_create(&self, name: &str) -> Result<IngredientModel, DbErr> {
        match self.find_by_name(name).await? {
            Some(ingredient) => Ok(ingredient),
            None => self.create(name).await,
        }
    }

    /// Returns `Ok(None)` when no ingredient with `ingredient_id` exists
    pub async fn rename(
        &self,
        ingredient_id: i32,
        name: &str,
    ) -> Result<Option<IngredientModel>, DbErr> {
        let existing = match entity::prelude::Ingredient::find_by_id(ingredient_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut ingredient_am = existing.into_active_model();
        ingredient_am.name = ActiveValue::Set(name.to_string());

        let ingredient = ingredient_am.update(self.db).await?;

        Ok(Some(ingredient))
    }

    /// Deletes an ingredient
    ///
    /// Returns OK regardless of ingredient existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, ingredient_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ingredient::delete_by_id(ingredient_id)
            .exec(self.db)
            .await
    }

    pub async fn get_many_by_ids(&self, ids: Vec<i32>) -> Result<Vec<IngredientModel>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
