use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::mason::Collection;

/// How hard a recipe is to make
///
/// Anything the API does not recognise is stored as [`Difficulty::Undefined`] rather than
/// rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Undefined,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Undefined => "undefined",
        }
    }

    /// Parses a difficulty, falling back to [`Difficulty::Undefined`] for missing or unknown
    /// values
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(value) => Self::ALL
                .into_iter()
                .find(|difficulty| difficulty.as_str().eq_ignore_ascii_case(value))
                .unwrap_or_default(),
            None => Self::Undefined,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable recipe fields
///
/// Used as the `recipe` object when creating a recipe and as the whole body when editing one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RecipeFieldsDto {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// One ingredient line of a recipe
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RecipeIngredientDto {
    /// Ingredient name, created if it does not exist yet
    pub name: String,
    pub amount: i32,
    /// Unit of measurement, created if it does not exist yet
    pub unit: String,
}

/// Request body for adding a recipe
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NewRecipeDto {
    pub recipe: RecipeFieldsDto,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientDto>,
}

/// Recipe as listed in a user's recipe collection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RecipeSummaryDto {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Name of the user owning the recipe
    pub owner: String,
}

/// Full recipe including its ingredient lines
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeDto {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub owner: String,
    pub ingredients: Collection<RecipeIngredientDto>,
}
