use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error as ThisError;

use crate::{
    model::mason::MasonError,
    server::{error::Error, hypermedia::error::error_response},
};

/// Errors caused by the request itself, each mapping to one 4xx status
#[derive(ThisError, Debug)]
pub enum ApiError {
    /// Body absent or not JSON (415)
    #[error("Request content type must be JSON: {0}")]
    ContentType(String),
    /// Body does not satisfy the resource's JSON schema (400)
    #[error("Request body failed schema validation: {}", .0.join("; "))]
    SchemaValidation(Vec<String>),
    /// Body passed validation but a required key could not be read (400)
    #[error("Request body is missing a required key: {0}")]
    MissingKey(String),
    /// Referenced resource does not exist (404)
    #[error("{resource} '{name}' not found")]
    NotFound {
        /// Kind of resource, e.g. `User`
        resource: &'static str,
        /// Name used to look the resource up
        name: String,
    },
    /// Uniqueness constraint would be violated (409)
    #[error("{resource} '{name}' already exists")]
    Duplicate {
        /// Kind of resource, e.g. `Recipe`
        resource: &'static str,
        /// Name that is already taken
        name: String,
    },
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::SchemaValidation(_) | Self::MissingKey(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } => StatusCode::CONFLICT,
        }
    }

    /// Converts a database error into [`ApiError::Duplicate`] when it is a unique constraint
    /// violation, otherwise passes it through as [`Error::DbErr`]
    pub fn duplicate_or_db(err: DbErr, resource: &'static str, name: &str) -> Error {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Duplicate {
                resource,
                name: name.to_string(),
            }
            .into(),
            _ => err.into(),
        }
    }

    fn to_mason(&self) -> MasonError {
        match self {
            Self::ContentType(detail) => {
                MasonError::new("Unsupported media type", vec![detail.clone()])
            }
            Self::SchemaValidation(messages) => MasonError::new("Invalid JSON", messages.clone()),
            Self::MissingKey(detail) => MasonError::new("Missing key", vec![detail.clone()]),
            Self::NotFound { .. } => MasonError::new("Not found", vec![self.to_string()]),
            Self::Duplicate { .. } => MasonError::new("Already exists", vec![self.to_string()]),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(self.status(), self.to_mason())
    }
}
