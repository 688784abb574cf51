use serde_json::json;

use crate::{
    model::{
        ingredient::IngredientDto,
        mason::{rel, Collection, Control, Envelope, LINK_RELATIONS_URL, NAMESPACE},
    },
    server::{
        hypermedia::{ingredient_href, ingredients_href},
        model::db::IngredientModel,
        schema,
    },
};

/// Envelope of a single ingredient
pub fn ingredient_item(ingredient: IngredientModel) -> Envelope<IngredientDto> {
    let href = ingredient_href(&ingredient.name);

    Envelope::new(IngredientDto {
        name: ingredient.name,
    })
    .with_namespace(NAMESPACE, LINK_RELATIONS_URL)
    .with_control(rel::SELF, Control::link(href.clone()))
    .with_control(rel::COLLECTION, Control::link(ingredients_href()))
    .with_control(
        rel::EDIT,
        Control::put(href.clone(), "Rename this ingredient", schema::ingredient()),
    )
    .with_control(rel::DELETE, Control::delete(href, "Delete this ingredient"))
}

/// Envelope of the ingredient collection
///
/// The add control accepts either a single ingredient or a batch.
pub fn ingredient_collection(ingredients: Vec<IngredientModel>) -> Envelope<Collection<IngredientDto>> {
    let items = ingredients
        .into_iter()
        .map(|ingredient| {
            let href = ingredient_href(&ingredient.name);
            Envelope::new(IngredientDto {
                name: ingredient.name,
            })
            .with_control(rel::SELF, Control::link(href))
        })
        .collect();

    let add_schema = json!({ "anyOf": [schema::ingredient(), schema::ingredient_batch()] });

    Envelope::new(Collection::new(items))
        .with_namespace(NAMESPACE, LINK_RELATIONS_URL)
        .with_control(rel::SELF, Control::link(ingredients_href()))
        .with_control(
            rel::ADD_INGREDIENT,
            Control::post(ingredients_href(), "Add ingredients", add_schema),
        )
}
