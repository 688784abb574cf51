use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::{body::JsonBody, path::UserParam},
        error::Error,
        hypermedia::{
            user::{user_collection, user_item},
            user_href, MasonJson,
        },
        model::app::AppState,
        schema,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/api/users/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Collection of every user", body = Vec<UserDto>, content_type = "application/vnd.mason+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list().await?;

    Ok(MasonJson(user_collection(users)))
}

/// Add a new user
#[utoipa::path(
    post,
    path = "/api/users/",
    tag = USER_TAG,
    request_body(content = UserDto, content_type = "application/json"),
    responses(
        (status = 201, description = "User created, Location header points to it"),
        (status = 400, description = "Body does not match the user schema", body = ErrorDto),
        (status = 409, description = "User name or email already in use", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, Error> {
    let user: UserDto = schema::parse_body(&schema::user(), body)?;

    let user = UserService::new(&state.db).create(user).await?;

    tracing::info!("Created user {}", user.name);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, user_href(&user.name))],
    ))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/api/users/{user}/",
    tag = USER_TAG,
    params(("user" = String, Path, description = "Name of the user")),
    responses(
        (status = 200, description = "The user", body = UserDto, content_type = "application/vnd.mason+json"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(UserParam(user): UserParam) -> Result<impl IntoResponse, Error> {
    Ok(MasonJson(user_item(user)))
}

/// Replace every field of a user
#[utoipa::path(
    put,
    path = "/api/users/{user}/",
    tag = USER_TAG,
    params(("user" = String, Path, description = "Name of the user")),
    request_body(content = UserDto, content_type = "application/json"),
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Body does not match the user schema", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "New name or email already in use", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_user(
    State(state): State<AppState>,
    UserParam(existing): UserParam,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, Error> {
    let user: UserDto = schema::parse_body(&schema::user(), body)?;

    UserService::new(&state.db).update(&existing, user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user along with their recipes
#[utoipa::path(
    delete,
    path = "/api/users/{user}/",
    tag = USER_TAG,
    params(("user" = String, Path, description = "Name of the user")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserParam(user): UserParam,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete(&user).await?;

    Ok(StatusCode::NO_CONTENT)
}
