//! Error types for the cookbook server.
//!
//! [`Error`] aggregates the request-level [`ApiError`] taxonomy, configuration errors and
//! database errors. Every variant implements `IntoResponse` and is rendered as a Mason error
//! envelope, so handlers can simply propagate with `?`.

pub mod api;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::mason::MasonError,
    server::{
        error::{api::ApiError, config::ConfigError},
        hypermedia::error::error_response,
    },
};

/// Main error type for the cookbook server.
///
/// Uses `thiserror`'s `#[from]` so domain errors and database errors convert with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Client error caused by the request (bad body, unknown resource, conflict).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Internal error indicating a bug in the cookbook's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into Mason error responses.
///
/// [`ApiError`]s map to their 4xx status; everything else is logged and returned as a generic
/// 500 so no internal details leak to the client.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApiError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            MasonError::new("Internal server error", Vec::new()),
        )
    }
}
