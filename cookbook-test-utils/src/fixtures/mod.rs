//! Test fixture modules.
//!
//! - `cookbook` - inserts users, recipes, ingredients and units directly into the database
//! - `factory` - JSON request bodies with standard test values

pub mod cookbook;
pub mod factory;
