use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::recipe::{Difficulty, RecipeFieldsDto},
    server::model::db::RecipeModel,
};

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    /// Creates a new instance of [`RecipeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the recipes owned by a user in insertion order
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::UserId.eq(user_id))
            .order_by_asc(entity::recipe::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a recipe by name among the recipes of one user
    pub async fn find_by_user_and_name(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<Option<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::UserId.eq(user_id))
            .filter(entity::recipe::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Creates a recipe owned by `user_id`
    ///
    /// Unrecognised difficulties are stored as `undefined`.
    pub async fn create(
        &self,
        user_id: i32,
        recipe: RecipeFieldsDto,
    ) -> Result<RecipeModel, DbErr> {
        let difficulty = Difficulty::parse_lenient(recipe.difficulty.as_deref());

        let recipe = entity::recipe::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(recipe.name),
            description: ActiveValue::Set(recipe.description),
            difficulty: ActiveValue::Set(difficulty.as_str().to_string()),
            ..Default::default()
        };

        recipe.insert(self.db).await
    }

    /// Replaces the name and description of a recipe, the owner is unchanged
    ///
    /// The stored difficulty is only replaced when `recipe.difficulty` is given. Returns
    /// `Ok(None)` when no recipe with `recipe_id` exists.
    pub async fn update(
        &self,
        recipe_id: i32,
        recipe: RecipeFieldsDto,
    ) -> Result<Option<RecipeModel>, DbErr> {
        let existing = match entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut recipe_am = existing.into_active_model();
        recipe_am.name = ActiveValue::Set(recipe.name);
        recipe_am.description = ActiveValue::Set(recipe.description);
        if let Some(difficulty) = recipe.difficulty.as_deref() {
            let difficulty = Difficulty::parse_lenient(Some(difficulty));
            recipe_am.difficulty = ActiveValue::Set(difficulty.as_str().to_string());
        }

        let recipe = recipe_am.update(self.db).await?;

        Ok(Some(recipe))
    }

    /// Deletes a recipe
    ///
    /// Returns OK regardless of recipe existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Recipe::delete_by_id(recipe_id)
            .exec(self.db)
            .await
    }

    /// Deletes every recipe owned by a user
    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Recipe::delete_many()
            .filter(entity::recipe::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
