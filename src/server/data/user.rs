use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::user::UserDto, server::model::db::UserModel};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every user in insertion order
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::CookbookUser::find()
            .order_by_asc(entity::cookbook_user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::CookbookUser::find()
            .filter(entity::cookbook_user::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Creates a new user
    ///
    /// Fails with a unique constraint violation when the name or email is taken.
    pub async fn create(&self, user: UserDto) -> Result<UserModel, DbErr> {
        let user = entity::cookbook_user::ActiveModel {
            name: ActiveValue::Set(user.name),
            email: ActiveValue::Set(user.email),
            address: ActiveValue::Set(user.address),
            password: ActiveValue::Set(user.password),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Replaces every field of a user
    ///
    /// Returns `Ok(None)` when no user with `user_id` exists.
    pub async fn update(&self, user_id: i32, user: UserDto) -> Result<Option<UserModel>, DbErr> {
        let existing = match entity::prelude::CookbookUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut user_am = existing.into_active_model();
        user_am.name = ActiveValue::Set(user.name);
        user_am.email = ActiveValue::Set(user.email);
        user_am.address = ActiveValue::Set(user.address);
        user_am.password = ActiveValue::Set(user.password);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CookbookUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
