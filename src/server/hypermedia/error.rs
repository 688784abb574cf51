//! Mason error envelopes.
//!
//! Errors are rendered where they happen, before the request path is known. The rendered
//! [`MasonError`] is therefore also stored in the response extensions, and the
//! [`attach_resource_url`] middleware re-renders the envelope with the requested path.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    model::{
        api::ErrorDto,
        mason::{rel, Control, Envelope, MasonError, ERROR_PROFILE},
    },
    server::hypermedia::MasonJson,
};

/// Builds an error envelope with a `profile` control to the error profile
pub fn error_envelope(resource_url: String, error: MasonError) -> Envelope<ErrorDto> {
    Envelope::new(ErrorDto { resource_url })
        .with_error(error)
        .with_control(rel::PROFILE, Control::link(ERROR_PROFILE))
}

/// Builds an error response, `resource_url` is filled in by [`attach_resource_url`]
pub fn error_response(status: StatusCode, error: MasonError) -> Response {
    let mut response = (status, MasonJson(error_envelope(String::new(), error.clone())))
        .into_response();
    response.extensions_mut().insert(error);

    response
}

/// Middleware filling in `resource_url` of error envelopes with the request path
pub async fn attach_resource_url(request: Request, next: Next) -> Response {
    let resource_url = request.uri().path().to_string();

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<MasonError>() {
        Some(error) => {
            let status = response.status();
            (status, MasonJson(error_envelope(resource_url, error))).into_response()
        }
        None => response,
    }
}
