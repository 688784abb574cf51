use crate::{
    model::{
        api::ApiIndexDto,
        mason::{rel, Control, Envelope, LINK_RELATIONS_URL, NAMESPACE},
    },
    server::hypermedia::{entry_href, ingredients_href, users_href},
};

/// Envelope of the API entry point linking to the top level collections
pub fn api_index() -> Envelope<ApiIndexDto> {
    Envelope::new(ApiIndexDto {
        title: "Cookbook API".to_string(),
    })
    .with_namespace(NAMESPACE, LINK_RELATIONS_URL)
    .with_control(rel::SELF, Control::link(entry_href()))
    .with_control(rel::USERS_ALL, Control::get(users_href(), "All users"))
    .with_control(
        rel::INGREDIENTS_ALL,
        Control::get(ingredients_href(), "All ingredients"),
    )
}
