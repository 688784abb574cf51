//! Mason envelope construction.
//!
//! One submodule per resource, each exposing plain functions that turn database models into
//! [`Envelope`](crate::model::mason::Envelope)s carrying exactly the controls that make sense
//! for that resource. The href builders below are the only place URLs are assembled.

pub mod entry;
pub mod error;
pub mod ingredient;
pub mod recipe;
pub mod user;

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{model::mason::MASON, server::error::InternalServerError};

/// Serializes `T` as the response body with the Mason media type
pub struct MasonJson<T>(pub T);

impl<T: Serialize> IntoResponse for MasonJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(MASON))],
                body,
            )
                .into_response(),
            Err(err) => InternalServerError(err).into_response(),
        }
    }
}

/// Href of the API entry point
pub fn entry_href() -> String {
    "/api/".to_string()
}

/// Href of the user collection
pub fn users_href() -> String {
    "/api/users/".to_string()
}

/// Href of a single user
pub fn user_href(user: &str) -> String {
    format!("/api/users/{}/", urlencoding::encode(user))
}

/// Href of a user's recipe collection
pub fn user_recipes_href(user: &str) -> String {
    format!("{}recipes/", user_href(user))
}

/// Href of a single recipe of `user`
pub fn recipe_href(user: &str, recipe: &str) -> String {
    format!("{}{}/", user_recipes_href(user), urlencoding::encode(recipe))
}

/// Href of the ingredient collection
pub fn ingredients_href() -> String {
    "/api/ingredients/".to_string()
}

/// Href of a single ingredient
pub fn ingredient_href(ingredient: &str) -> String {
    format!("/api/ingredients/{}/", urlencoding::encode(ingredient))
}
