use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        ingredient::{IngredientBatchDto, IngredientDto},
    },
    server::{
        controller::util::{body::JsonBody, path::IngredientParam},
        error::Error,
        hypermedia::{
            ingredient::{ingredient_collection, ingredient_item},
            ingredient_href, MasonJson,
        },
        model::app::AppState,
        schema,
        service::ingredient::IngredientService,
    },
};

pub static INGREDIENT_TAG: &str = "ingredient";

/// Reads either a single ingredient or a batch, told apart by the `ingredients` key
fn parse_ingredients(body: Value) -> Result<Vec<IngredientDto>, Error> {
    if body.get("ingredients").is_some() {
        let batch: IngredientBatchDto = schema::parse_body(&schema::ingredient_batch(), body)?;
        Ok(batch.ingredients)
    } else {
        let ingredient: IngredientDto = schema::parse_body(&schema::ingredient(), body)?;
        Ok(vec![ingredient])
    }
}

/// List all ingredients
#[utoipa::path(
    get,
    path = "/api/ingredients/",
    tag = INGREDIENT_TAG,
    responses(
        (status = 200, description = "Collection of every ingredient", body = Vec<IngredientDto>, content_type = "application/vnd.mason+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredients(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let ingredients = IngredientService::new(&state.db).list().await?;

    Ok(MasonJson(ingredient_collection(ingredients)))
}

/// Add one ingredient, or several at once
///
/// A batch is created as a whole or not at all. The Location header points to the first
/// ingredient created.
#[utoipa::path(
    post,
    path = "/api/ingredients/",
    tag = INGREDIENT_TAG,
    request_body(content = IngredientBatchDto, description = "Either `{\"name\": ..}` or a batch", content_type = "application/json"),
    responses(
        (status = 201, description = "Ingredients created, Location header points to the first"),
        (status = 400, description = "Body matches neither the ingredient nor the batch schema", body = ErrorDto),
        (status = 409, description = "An ingredient name already exists", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_ingredients(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, Error> {
    let ingredients = parse_ingredients(body)?;

    let created = IngredientService::new(&state.db)
        .create_many(ingredients)
        .await?;

    let first = created.first().ok_or_else(|| {
        Error::InternalError("Ingredient batch passed validation but was empty".to_string())
    })?;

    tracing::info!("Created {} ingredient(s)", created.len());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, ingredient_href(&first.name))],
    ))
}

/// Get a single ingredient
#[utoipa::path(
    get,
    path = "/api/ingredients/{ingredient}/",
    tag = INGREDIENT_TAG,
    params(("ingredient" = String, Path, description = "Name of the ingredient")),
    responses(
        (status = 200, description = "The ingredient", body = IngredientDto, content_type = "application/vnd.mason+json"),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    IngredientParam(ingredient): IngredientParam,
) -> Result<impl IntoResponse, Error> {
    Ok(MasonJson(ingredient_item(ingredient)))
}

/// Rename an ingredient
#[utoipa::path(
    put,
    path = "/api/ingredients/{ingredient}/",
    tag = INGREDIENT_TAG,
    params(("ingredient" = String, Path, description = "Name of the ingredient")),
    request_body(content = IngredientDto, content_type = "application/json"),
    responses(
        (status = 204, description = "Ingredient renamed"),
        (status = 400, description = "Body does not match the ingredient schema", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 409, description = "New name already in use", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_ingredient(
    State(state): State<AppState>,
    IngredientParam(existing): IngredientParam,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, Error> {
    let ingredient: IngredientDto = schema::parse_body(&schema::ingredient(), body)?;

    IngredientService::new(&state.db)
        .update(&existing, ingredient)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an ingredient and remove it from every recipe
#[utoipa::path(
    delete,
    path = "/api/ingredients/{ingredient}/",
    tag = INGREDIENT_TAG,
    params(("ingredient" = String, Path, description = "Name of the ingredient")),
    responses(
        (status = 204, description = "Ingredient deleted"),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    IngredientParam(ingredient): IngredientParam,
) -> Result<impl IntoResponse, Error> {
    IngredientService::new(&state.db).delete(&ingredient).await?;

    Ok(StatusCode::NO_CONTENT)
}
