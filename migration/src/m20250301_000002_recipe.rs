use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_cookbook_user::CookbookUser;

static IDX_RECIPE_USER_ID: &str = "idx-recipe-user_id";
static FK_RECIPE_USER_ID: &str = "fk-recipe-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipe::Id))
                    .col(integer(Recipe::UserId))
                    .col(string_len_uniq(Recipe::Name, 64))
                    .col(text(Recipe::Description))
                    .col(string_len(Recipe::Difficulty, 20))
                    // SQLite cannot add foreign keys after the fact
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_USER_ID)
                            .from(Recipe::Table, Recipe::UserId)
                            .to(CookbookUser::Table, CookbookUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_USER_ID)
                    .table(Recipe::Table)
                    .col(Recipe::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_USER_ID)
                    .table(Recipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Recipe {
    Table,
    Id,
    UserId,
    Name,
    Description,
    Difficulty,
}
