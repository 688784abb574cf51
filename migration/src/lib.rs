pub use sea_orm_migration::prelude::*;

mod m20250301_000001_cookbook_user;
mod m20250301_000002_recipe;
mod m20250301_000003_ingredient;
mod m20250301_000004_unit;
mod m20250301_000005_recipe_ingredient;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_cookbook_user::Migration),
            Box::new(m20250301_000002_recipe::Migration),
            Box::new(m20250301_000003_ingredient::Migration),
            Box::new(m20250301_000004_unit::Migration),
            Box::new(m20250301_000005_recipe_ingredient::Migration),
        ]
    }
}
