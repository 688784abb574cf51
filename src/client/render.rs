//! Plain text rendering of API resources.

use crate::{
    client::error::ClientError,
    model::{
        ingredient::IngredientDto,
        mason::Collection,
        recipe::{RecipeDto, RecipeSummaryDto},
        user::UserDto,
    },
};

pub fn users(users: &Collection<UserDto>) -> String {
    if users.items.is_empty() {
        return "No users.".to_string();
    }

    users
        .items
        .iter()
        .map(|user| format!("- {} <{}>", user.body.name, user.body.email))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn user(user: &UserDto) -> String {
    format!("{} <{}>\n{}", user.name, user.email, user.address)
}

pub fn ingredients(ingredients: &Collection<IngredientDto>) -> String {
    if ingredients.items.is_empty() {
        return "No ingredients.".to_string();
    }

    ingredients
        .items
        .iter()
        .map(|ingredient| format!("- {}", ingredient.body.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn recipes(recipes: &Collection<RecipeSummaryDto>) -> String {
    if recipes.items.is_empty() {
        return "No recipes.".to_string();
    }

    recipes
        .items
        .iter()
        .map(|recipe| format!("- {} ({})", recipe.body.name, recipe.body.difficulty))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full recipe including one line per ingredient
pub fn recipe(recipe: &RecipeDto) -> String {
    let mut lines = vec![
        format!("{} by {}", recipe.name, recipe.owner),
        format!("Difficulty: {}", recipe.difficulty),
        recipe.description.clone(),
        "Ingredients:".to_string(),
    ];

    if recipe.ingredients.items.is_empty() {
        lines.push("  (none)".to_string());
    }

    for line in &recipe.ingredients.items {
        lines.push(format!(
            "  - {} {} {}",
            line.body.amount, line.body.unit, line.body.name
        ));
    }

    lines.join("\n")
}

/// Error as shown to the user, API errors list every message of their `@error` block
pub fn error(err: &ClientError) -> String {
    match err {
        ClientError::Api {
            status,
            message,
            details,
        } => {
            let mut lines = vec![format!("Error {}: {}", status, message)];
            lines.extend(details.iter().map(|detail| format!("  {}", detail)));
            lines.join("\n")
        }
        err => format!("Error: {}", err),
    }
}
