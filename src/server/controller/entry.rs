use axum::response::IntoResponse;

use crate::{
    model::api::{ApiIndexDto, ErrorDto},
    server::hypermedia::{entry::api_index, MasonJson},
};

pub static ENTRY_TAG: &str = "entry";

/// API entry point linking to the user and ingredient collections
#[utoipa::path(
    get,
    path = "/api/",
    tag = ENTRY_TAG,
    responses(
        (status = 200, description = "Entry point with links to the top level collections", body = ApiIndexDto, content_type = "application/vnd.mason+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_api_index() -> impl IntoResponse {
    MasonJson(api_index())
}
