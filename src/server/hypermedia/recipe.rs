use crate::{
    model::{
        mason::{rel, Collection, Control, Envelope, LINK_RELATIONS_URL, NAMESPACE},
        recipe::{Difficulty, RecipeDto, RecipeIngredientDto, RecipeSummaryDto},
    },
    server::{
        hypermedia::{ingredient_href, recipe_href, user_href, user_recipes_href},
        model::db::{RecipeModel, UserModel},
        schema,
    },
};

/// Envelope of a full recipe including its ingredient lines
///
/// Each ingredient line links to the ingredient it uses.
pub fn recipe_item(
    owner: &UserModel,
    recipe: RecipeModel,
    ingredients: Vec<RecipeIngredientDto>,
) -> Envelope<RecipeDto> {
    let href = recipe_href(&owner.name, &recipe.name);

    let ingredients = ingredients
        .into_iter()
        .map(|line| {
            let ingredient = ingredient_href(&line.name);
            Envelope::new(line).with_control(rel::SELF, Control::link(ingredient))
        })
        .collect();

    Envelope::new(RecipeDto {
        name: recipe.name,
        description: recipe.description,
        difficulty: Difficulty::parse_lenient(Some(&recipe.difficulty)),
        owner: owner.name.clone(),
        ingredients: Collection::new(ingredients),
    })
    .with_namespace(NAMESPACE, LINK_RELATIONS_URL)
    .with_control(rel::SELF, Control::link(href.clone()))
    .with_control(
        rel::COLLECTION,
        Control::link(user_recipes_href(&owner.name)),
    )
    .with_control(rel::AUTHOR, Control::link(user_href(&owner.name)))
    .with_control(
        rel::EDIT,
        Control::put(href.clone(), "Edit this recipe", schema::recipe()),
    )
    .with_control(rel::DELETE, Control::delete(href, "Delete this recipe"))
}

/// Envelope of the recipes owned by `owner`
pub fn recipe_collection(
    owner: &UserModel,
    recipes: Vec<RecipeModel>,
) -> Envelope<Collection<RecipeSummaryDto>> {
    let collection_href = user_recipes_href(&owner.name);

    let items = recipes
        .into_iter()
        .map(|recipe| {
            let href = recipe_href(&owner.name, &recipe.name);
            Envelope::new(RecipeSummaryDto {
                difficulty: Difficulty::parse_lenient(Some(&recipe.difficulty)),
                name: recipe.name,
                description: recipe.description,
                owner: owner.name.clone(),
            })
            .with_control(rel::SELF, Control::link(href))
        })
        .collect();

    Envelope::new(Collection::new(items))
        .with_namespace(NAMESPACE, LINK_RELATIONS_URL)
        .with_control(rel::SELF, Control::link(collection_href.clone()))
        .with_control(rel::AUTHOR, Control::link(user_href(&owner.name)))
        .with_control(
            rel::ADD_RECIPE,
            Control::post(collection_href, "Add a new recipe", schema::new_recipe()),
        )
}
