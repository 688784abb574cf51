//! Factory functions for request bodies.
//!
//! Pure functions returning JSON values with standard test data, suitable for sending to the
//! API in controller and client tests.

use serde_json::{json, Value};

/// User body with every field derived from `name`
pub fn user_body(name: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "address": format!("{} Street 1", name),
        "password": "password"
    })
}

/// Recipe fields body as accepted when editing a recipe
pub fn recipe_fields_body(name: &str, difficulty: &str) -> Value {
    json!({
        "name": name,
        "description": format!("How to make {}", name),
        "difficulty": difficulty
    })
}

/// New recipe body with `(ingredient, amount, unit)` lines
pub fn new_recipe_body(name: &str, ingredients: &[(&str, i32, &str)]) -> Value {
    let ingredients: Vec<Value> = ingredients
        .iter()
        .map(|(ingredient, amount, unit)| {
            json!({ "name": ingredient, "amount": amount, "unit": unit })
        })
        .collect();

    json!({
        "recipe": recipe_fields_body(name, "easy"),
        "ingredients": ingredients
    })
}

pub fn ingredient_body(name: &str) -> Value {
    json!({ "name": name })
}

pub fn ingredient_batch_body(names: &[&str]) -> Value {
    let ingredients: Vec<Value> = names.iter().map(|name| ingredient_body(name)).collect();

    json!({ "ingredients": ingredients })
}
