//! HTTP controller endpoints for the cookbook API.
//!
//! Axum handlers, one module per resource. Each handler resolves its path parameters, validates
//! the body against the resource's JSON schema, calls the service layer and answers with a
//! Mason envelope. All handlers are documented for OpenAPI with utoipa.

pub mod entry;
pub mod ingredient;
pub mod recipe;
pub mod user;
pub mod util;

use axum::{http::StatusCode, response::Response};

use crate::{model::mason::MasonError, server::hypermedia::error::error_response};

/// Fallback for URLs that match no route
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        MasonError::new("Not found", vec!["No resource exists at this URL".to_string()]),
    )
}
