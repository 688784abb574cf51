//! `SeaORM` entities for the cookbook database.

pub mod prelude;

pub mod cookbook_user;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod unit;
