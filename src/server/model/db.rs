//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Type alias for a cookbook user.
///
/// # Fields (from `entity::cookbook_user::Model`)
/// - `id` - Primary key
/// - `name` - Unique user name, also the user's URL segment
/// - `email` - Unique email address
/// - `address` - Postal address
/// - `password` - Password as provided by the client
pub type UserModel = entity::cookbook_user::Model;

/// Type alias for a recipe.
///
/// # Fields (from `entity::recipe::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `name` - Globally unique recipe name
/// - `description` - Free text description
/// - `difficulty` - One of `easy`, `medium`, `hard` or `undefined`
pub type RecipeModel = entity::recipe::Model;

/// Type alias for an ingredient, `name` is unique.
pub type IngredientModel = entity::ingredient::Model;

/// Type alias for a unit of measurement, names are not unique.
pub type UnitModel = entity::unit::Model;

/// Type alias for a recipe ingredient line.
///
/// # Fields (from `entity::recipe_ingredient::Model`)
/// - `recipe_id`, `ingredient_id`, `unit_id` - Composite primary key
/// - `amount` - Quantity of the ingredient in the given unit
pub type RecipeIngredientModel = entity::recipe_ingredient::Model;
