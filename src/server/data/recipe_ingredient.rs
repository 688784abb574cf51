use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::RecipeIngredientModel;

pub struct RecipeIngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeIngredientRepository<'a, C> {
    /// Creates a new instance of [`RecipeIngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds an ingredient line to a recipe at `position`
    ///
    /// Fails with a unique constraint violation if the recipe already uses the same ingredient
    /// in the same unit.
    pub async fn create(
        &self,
        recipe_id: i32,
        ingredient_id: i32,
        unit_id: i32,
        amount: i32,
        position: i32,
    ) -> Result<RecipeIngredientModel, DbErr> {
        let line = entity::recipe_ingredient::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            ingredient_id: ActiveValue::Set(ingredient_id),
            unit_id: ActiveValue::Set(unit_id),
            amount: ActiveValue::Set(amount),
            position: ActiveValue::Set(position),
        };

        line.insert(self.db).await
    }

    /// Returns the lines of a recipe in the order they were added
    pub async fn get_by_recipe_id(
        &self,
        recipe_id: i32,
    ) -> Result<Vec<RecipeIngredientModel>, DbErr> {
        entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .order_by_asc(entity::recipe_ingredient::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn delete_by_recipe_ids(&self, recipe_ids: Vec<i32>) -> Result<DeleteResult, DbErr> {
        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_ingredient_id(
        &self,
        ingredient_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::IngredientId.eq(ingredient_id))
            .exec(self.db)
            .await
    }
}
