use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::server::error::{api::ApiError, Error};

/// Request body parsed as untyped JSON
///
/// Rejects with [`ApiError::ContentType`] when the body is missing, is not sent as JSON or
/// cannot be parsed. The value is validated against a schema afterwards, see
/// [`crate::server::schema::parse_body`].
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::ContentType(rejection.body_text()).into()),
        }
    }
}
