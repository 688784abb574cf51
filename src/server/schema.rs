//! JSON schemas for request bodies and body validation.
//!
//! The schemas are served inside `POST`/`PUT` controls so clients know what to send, and the
//! same values are used to validate incoming bodies before they are deserialized.

use jsonschema::JSONSchema;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
    model::recipe::Difficulty,
    server::error::{api::ApiError, Error},
};

fn string_property(description: &str) -> Value {
    json!({ "description": description, "type": "string", "minLength": 1 })
}

/// Schema for a user body
pub fn user() -> Value {
    json!({
        "type": "object",
        "required": ["name", "email", "address", "password"],
        "properties": {
            "name": string_property("Name of the user"),
            "email": string_property("Email address of the user"),
            "address": string_property("Postal address of the user"),
            "password": string_property("Password of the user"),
        }
    })
}

/// Schema for editable recipe fields
pub fn recipe() -> Value {
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(Difficulty::as_str).collect();

    json!({
        "type": "object",
        "required": ["name", "description"],
        "properties": {
            "name": string_property("Name of the recipe"),
            "description": string_property("Description of the recipe"),
            "difficulty": {
                "description": format!(
                    "One of {}, anything else is stored as undefined",
                    difficulties.join(", ")
                ),
                "type": "string"
            },
        }
    })
}

/// Schema for a unit of measurement
pub fn unit() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": string_property("Unit of measurement, e.g. dl or cup"),
        }
    })
}

/// Schema for one ingredient line of a recipe
pub fn recipe_ingredient() -> Value {
    json!({
        "type": "object",
        "required": ["name", "amount", "unit"],
        "properties": {
            "name": string_property("Name of the ingredient"),
            "amount": {
                "description": "Amount of the ingredient",
                "type": "integer",
                "minimum": 0
            },
            "unit": unit()["properties"]["name"].clone(),
        }
    })
}

/// Schema for a new recipe with its ingredient lines
pub fn new_recipe() -> Value {
    json!({
        "type": "object",
        "required": ["recipe"],
        "properties": {
            "recipe": recipe(),
            "ingredients": {
                "type": "array",
                "items": recipe_ingredient()
            },
        }
    })
}

/// Schema for an ingredient
pub fn ingredient() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": string_property("Name of the ingredient"),
        }
    })
}

/// Schema for adding several ingredients at once
pub fn ingredient_batch() -> Value {
    json!({
        "type": "object",
        "required": ["ingredients"],
        "properties": {
            "ingredients": {
                "type": "array",
                "minItems": 1,
                "items": ingredient()
            },
        }
    })
}

/// Validates `instance` against `schema`
///
/// # Returns
/// - `Ok(())` - The instance satisfies the schema
/// - `Err(Error::ApiError(ApiError::SchemaValidation(_)))` - One message per violation
/// - `Err(Error::InternalError(_))` - The schema itself does not compile
pub fn validate(schema: &Value, instance: &Value) -> Result<(), Error> {
    let compiled = JSONSchema::compile(schema)
        .map_err(|e| Error::InternalError(format!("Invalid JSON schema: {}", e)))?;

    let messages: Vec<String> = match compiled.validate(instance) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };

    if messages.is_empty() {
        Ok(())
    } else {
        Err(ApiError::SchemaValidation(messages).into())
    }
}

/// Validates a request body and deserializes it
///
/// A body that passes the schema but still cannot be read into `T` is reported as
/// [`ApiError::MissingKey`].
pub fn parse_body<T: DeserializeOwned>(schema: &Value, body: Value) -> Result<T, Error> {
    validate(schema, &body)?;

    serde_json::from_value(body).map_err(|e| ApiError::MissingKey(e.to_string()).into())
}
