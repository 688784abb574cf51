//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so
//! services can run them against the connection pool or inside a transaction.

pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod unit;
pub mod user;
