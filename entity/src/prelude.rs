pub use super::cookbook_user::Entity as CookbookUser;
pub use super::ingredient::Entity as Ingredient;
pub use super::recipe::Entity as Recipe;
pub use super::recipe_ingredient::Entity as RecipeIngredient;
pub use super::unit::Entity as Unit;
