use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        recipe::{NewRecipeDto, RecipeFieldsDto, RecipeSummaryDto},
    },
    server::{
        controller::util::{
            body::JsonBody,
            path::{RecipeParam, UserParam},
        },
        error::Error,
        hypermedia::{
            recipe::{recipe_collection, recipe_item},
            recipe_href, MasonJson,
        },
        model::app::AppState,
        schema,
        service::recipe::RecipeService,
    },
};

pub static RECIPE_TAG: &str = "recipe";

/// List the recipes of a user
#[utoipa::path(
    get,
    path = "/api/users/{user}/recipes/",
    tag = RECIPE_TAG,
    params(("user" = String, Path, description = "Name of the owning user")),
    responses(
        (status = 200, description = "Collection of the user's recipes", body = Vec<RecipeSummaryDto>, content_type = "application/vnd.mason+json"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    UserParam(owner): UserParam,
) -> Result<impl IntoResponse, Error> {
    let recipes = RecipeService::new(&state.db).list(&owner).await?;

    Ok(MasonJson(recipe_collection(&owner, recipes)))
}

/// Add a recipe to a user
///
/// Ingredients and units named by the ingredient lines are created when missing.
#[utoipa::path(
    post,
    path = "/api/users/{user}/recipes/",
    tag = RECIPE_TAG,
    params(("user" = String, Path, description = "Name of the owning user")),
    request_body(content = NewRecipeDto, content_type = "application/json"),
    responses(
        (status = 201, description = "Recipe created, Location header points to it"),
        (status = 400, description = "Body does not match the recipe schema", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Recipe name already in use or ingredient line repeated", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_recipe(
    State(state): State<AppState>,
    UserParam(owner): UserParam,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, Error> {
    let new_recipe: NewRecipeDto = schema::parse_body(&schema::new_recipe(), body)?;

    let recipe = RecipeService::new(&state.db)
        .create(&owner, new_recipe)
        .await?;

    tracing::info!("Created recipe {} for user {}", recipe.name, owner.name);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, recipe_href(&owner.name, &recipe.name))],
    ))
}

/// Get a recipe with its ingredient lines
#[utoipa::path(
    get,
    path = "/api/users/{user}/recipes/{recipe}/",
    tag = RECIPE_TAG,
    params(
        ("user" = String, Path, description = "Name of the owning user"),
        ("recipe" = String, Path, description = "Name of the recipe")
    ),
    responses(
        (status = 200, description = "The recipe including its ingredients", body = RecipeSummaryDto, content_type = "application/vnd.mason+json"),
        (status = 404, description = "User or recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    RecipeParam { owner, recipe }: RecipeParam,
) -> Result<impl IntoResponse, Error> {
    let ingredients = RecipeService::new(&state.db).ingredients(&recipe).await?;

    Ok(MasonJson(recipe_item(&owner, recipe, ingredients)))
}

/// Edit the name, description and difficulty of a recipe
#[utoipa::path(
    put,
    path = "/api/users/{user}/recipes/{recipe}/",
    tag = RECIPE_TAG,
    params(
        ("user" = String, Path, description = "Name of the owning user"),
        ("recipe" = String, Path, description = "Name of the recipe")
    ),
    request_body(content = RecipeFieldsDto, content_type = "application/json"),
    responses(
        (status = 204, description = "Recipe updated"),
        (status = 400, description = "Body does not match the recipe schema", body = ErrorDto),
        (status = 404, description = "User or recipe not found", body = ErrorDto),
        (status = 409, description = "New recipe name already in use", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_recipe(
    State(state): State<AppState>,
    RecipeParam { recipe, .. }: RecipeParam,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, Error> {
    let fields: RecipeFieldsDto = schema::parse_body(&schema::recipe(), body)?;

    RecipeService::new(&state.db).update(&recipe, fields).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a recipe
#[utoipa::path(
    delete,
    path = "/api/users/{user}/recipes/{recipe}/",
    tag = RECIPE_TAG,
    params(
        ("user" = String, Path, description = "Name of the owning user"),
        ("recipe" = String, Path, description = "Name of the recipe")
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "User or recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    RecipeParam { recipe, .. }: RecipeParam,
) -> Result<impl IntoResponse, Error> {
    RecipeService::new(&state.db).delete(&recipe).await?;

    Ok(StatusCode::NO_CONTENT)
}
