use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::UserDto,
    server::{
        data::{
            recipe::RecipeRepository, recipe_ingredient::RecipeIngredientRepository,
            user::UserRepository,
        },
        error::{api::ApiError, Error},
        model::db::UserModel,
    },
};

static RESOURCE: &str = "User";

/// Service for managing users.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every user
    pub async fn list(&self) -> Result<Vec<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Looks a user up by name
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The user named `name`
    /// - `Err(Error::ApiError(ApiError::NotFound))` - No such user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, name: &str) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
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

    /// Creates a user
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::ApiError(ApiError::Duplicate))` - Name or email already in use
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, user: UserDto) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);
        let name = user.name.clone();

        if user_repository.find_by_name(&name).await?.is_some() {
            return Err(ApiError::Duplicate {
                resource: RESOURCE,
                name,
            }
            .into());
        }

        user_repository
            .create(user)
            .await
            .map_err(|e| ApiError::duplicate_or_db(e, RESOURCE, &name))
    }

    /// Replaces every field of `existing`
    ///
    /// The update runs in a transaction which is rolled back when the new name or email
    /// collides with another user.
    pub async fn update(&self, existing: &UserModel, user: UserDto) -> Result<UserModel, Error> {
        let name = user.name.clone();

        let txn = self.db.begin().await?;

        let updated = UserRepository::new(&txn)
            .update(existing.id, user)
            .await
            .map_err(|e| ApiError::duplicate_or_db(e, RESOURCE, &name))?
            .ok_or_else(|| ApiError::NotFound {
                resource: RESOURCE,
                name: existing.name.clone(),
            })?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a user together with their recipes and the recipes' ingredient lines
    pub async fn delete(&self, user: &UserModel) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let recipe_repository = RecipeRepository::new(&txn);
        let recipe_ids: Vec<i32> = recipe_repository
            .get_by_user_id(user.id)
            .await?
            .into_iter()
            .map(|recipe| recipe.id)
            .collect();

        RecipeIngredientRepository::new(&txn)
            .delete_by_recipe_ids(recipe_ids)
            .await?;
        recipe_repository.delete_by_user_id(user.id).await?;
        UserRepository::new(&txn).delete(user.id).await?;

        txn.commit().await?;

        tracing::info!("Deleted user {}", user.name);

        Ok(())
    }
}
