use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CookbookUser::Table)
                    .if_not_exists()
                    .col(pk_auto(CookbookUser::Id))
                    .col(string_len_uniq(CookbookUser::Name, 100))
                    .col(string_len_uniq(CookbookUser::Email, 100))
                    .col(string_len(CookbookUser::Address, 100))
                    .col(string_len(CookbookUser::Password, 100))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CookbookUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CookbookUser {
    Table,
    Id,
    Name,
    Email,
    Address,
    Password,
}
