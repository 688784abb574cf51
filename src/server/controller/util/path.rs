//! Path parameter converters.
//!
//! Each extractor reads its named segments from the matched route and looks the row up, so a
//! handler receiving one always holds an existing row. Unknown names reject with
//! [`ApiError::NotFound`](crate::server::error::api::ApiError::NotFound).

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::server::{
    error::Error,
    model::{
        app::AppState,
        db::{IngredientModel, RecipeModel, UserModel},
    },
    service::{ingredient::IngredientService, recipe::RecipeService, user::UserService},
};

#[derive(Deserialize)]
struct UserSegment {
    user: String,
}

#[derive(Deserialize)]
struct RecipeSegments {
    user: String,
    recipe: String,
}

#[derive(Deserialize)]
struct IngredientSegment {
    ingredient: String,
}

async fn segments<T>(parts: &mut Parts, state: &AppState) -> Result<T, Error>
where
    T: DeserializeOwned + Send,
{
    Path::<T>::from_request_parts(parts, state)
        .await
        .map(|Path(segments)| segments)
        .map_err(|rejection| Error::InternalError(rejection.body_text()))
}

/// The user named by the `{user}` segment
pub struct UserParam(pub UserModel);

impl FromRequestParts<AppState> for UserParam {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let segment: UserSegment = segments(parts, state).await?;

        let user = UserService::new(&state.db).get(&segment.user).await?;

        Ok(Self(user))
    }
}

/// The recipe named by the `{recipe}` segment, resolved among the recipes of `{user}`
pub struct RecipeParam {
    pub owner: UserModel,
    pub recipe: RecipeModel,
}

impl FromRequestParts<AppState> for RecipeParam {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let segments: RecipeSegments = segments(parts, state).await?;

        let owner = UserService::new(&state.db).get(&segments.user).await?;
        let recipe = RecipeService::new(&state.db)
            .get(&owner, &segments.recipe)
            .await?;

        Ok(Self { owner, recipe })
    }
}

/// The ingredient named by the `{ingredient}` segment
pub struct IngredientParam(pub IngredientModel);

impl FromRequestParts<AppState> for IngredientParam {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let segment: IngredientSegment = segments(parts, state).await?;

        let ingredient = IngredientService::new(&state.db)
            .get(&segment.ingredient)
            .await?;

        Ok(Self(ingredient))
    }
}
