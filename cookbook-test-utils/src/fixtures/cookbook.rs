use sea_orm::{ActiveValue, ColumnTrait, DbErr, EntityTrait, QueryFilter};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn cookbook<'a>(&'a self) -> CookbookFixtures<'a> {
        CookbookFixtures { setup: self }
    }
}

pub struct CookbookFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> CookbookFixtures<'a> {
    /// Inserts a user whose email, address and password are derived from `name`
    pub async fn insert_user(&self, name: &str) -> Result<entity::cookbook_user::Model, TestError> {
        Ok(
            entity::prelude::CookbookUser::insert(entity::cookbook_user::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(format!("{}@example.com", name.to_lowercase())),
                address: ActiveValue::Set(format!("{} Street 1", name)),
                password: ActiveValue::Set("password".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_ingredient(
        &self,
        name: &str,
    ) -> Result<entity::ingredient::Model, TestError> {
        Ok(
            entity::prelude::Ingredient::insert(entity::ingredient::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_unit(&self, name: &str) -> Result<entity::unit::Model, TestError> {
        Ok(entity::prelude::Unit::insert(entity::unit::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Inserts a recipe with difficulty `easy` and a generated description
    pub async fn insert_recipe(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<entity::recipe::Model, TestError> {
        Ok(entity::prelude::Recipe::insert(entity::recipe::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(format!("How to make {}", name)),
            difficulty: ActiveValue::Set("easy".to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_recipe_ingredient(
        &self,
        recipe_id: i32,
        ingredient_id: i32,
        unit_id: i32,
        amount: i32,
        position: i32,
    ) -> Result<entity::recipe_ingredient::Model, TestError> {
        Ok(entity::prelude::RecipeIngredient::insert(
            entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                ingredient_id: ActiveValue::Set(ingredient_id),
                unit_id: ActiveValue::Set(unit_id),
                amount: ActiveValue::Set(amount),
                position: ActiveValue::Set(position),
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Inserts a user together with one recipe owned by them
    pub async fn insert_user_with_recipe(
        &self,
        user_name: &str,
        recipe_name: &str,
    ) -> Result<(entity::cookbook_user::Model, entity::recipe::Model), TestError> {
        let user_model = self.insert_user(user_name).await?;
        let recipe_model = self.insert_recipe(user_model.id, recipe_name).await?;

        Ok((user_model, recipe_model))
    }

    /// Inserts a recipe for an existing user along with its ingredient lines
    ///
    /// Ingredients and units are reused when a row with the same name exists.
    pub async fn insert_recipe_by_owner_name(
        &self,
        owner: &str,
        name: &str,
        ingredients: &[(String, i32, String)],
    ) -> Result<entity::recipe::Model, TestError> {
        let db = &self.setup.state.db;

        let owner_model = entity::prelude::CookbookUser::find()
            .filter(entity::cookbook_user::Column::Name.eq(owner))
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User {}", owner)))?;

        let recipe_model = self.insert_recipe(owner_model.id, name).await?;

        for (position, (ingredient, amount, unit)) in ingredients.iter().enumerate() {
            let ingredient_model = match entity::prelude::Ingredient::find()
                .filter(entity::ingredient::Column::Name.eq(ingredient.as_str()))
                .one(db)
                .await?
            {
                Some(model) => model,
                None => self.insert_ingredient(ingredient).await?,
            };

            let unit_model = match entity::prelude::Unit::find()
                .filter(entity::unit::Column::Name.eq(unit.as_str()))
                .one(db)
                .await?
            {
                Some(model) => model,
                None => self.insert_unit(unit).await?,
            };

            self.insert_recipe_ingredient(
                recipe_model.id,
                ingredient_model.id,
                unit_model.id,
                *amount,
                position as i32,
            )
            .await?;
        }

        Ok(recipe_model)
    }
}
