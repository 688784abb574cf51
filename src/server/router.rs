//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every resource handler is registered here together with its OpenAPI specification, and
//! Swagger UI is served at `/api/docs`. URLs that match no route get a Mason 404, and every
//! error envelope is stamped with the request path on its way out.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller, hypermedia::error::attach_resource_url, model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/` - Entry point
/// - `GET|POST /api/users/` - User collection
/// - `GET|PUT|DELETE /api/users/{user}/` - Single user
/// - `GET|POST /api/users/{user}/recipes/` - Recipes of a user
/// - `GET|PUT|DELETE /api/users/{user}/recipes/{recipe}/` - Single recipe
/// - `GET|POST /api/ingredients/` - Ingredient collection
/// - `GET|PUT|DELETE /api/ingredients/{ingredient}/` - Single ingredient
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Cookbook", description = "Cookbook hypermedia API"), tags(
        (name = controller::entry::ENTRY_TAG, description = "API entry point"),
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::recipe::RECIPE_TAG, description = "Recipe API routes"),
        (name = controller::ingredient::INGREDIENT_TAG, description = "Ingredient API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::entry::get_api_index))
        .routes(routes!(
            controller::user::get_users,
            controller::user::post_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::put_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::recipe::get_recipes,
            controller::recipe::post_recipe
        ))
        .routes(routes!(
            controller::recipe::get_recipe,
            controller::recipe::put_recipe,
            controller::recipe::delete_recipe
        ))
        .routes(routes!(
            controller::ingredient::get_ingredients,
            controller::ingredient::post_ingredients
        ))
        .routes(routes!(
            controller::ingredient::get_ingredient,
            controller::ingredient::put_ingredient,
            controller::ingredient::delete_ingredient
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::not_found)
        .layer(middleware::from_fn(attach_resource_url))
}
