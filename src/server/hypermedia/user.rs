use crate::{
    model::{
        mason::{rel, Collection, Control, Envelope, LINK_RELATIONS_URL, NAMESPACE, USER_PROFILE},
        user::UserDto,
    },
    server::{
        hypermedia::{user_href, user_recipes_href, users_href},
        model::db::UserModel,
        schema,
    },
};

fn user_dto(user: UserModel) -> UserDto {
    UserDto {
        name: user.name,
        email: user.email,
        address: user.address,
        password: user.password,
    }
}

/// Envelope of a single user with edit and delete controls
pub fn user_item(user: UserModel) -> Envelope<UserDto> {
    let href = user_href(&user.name);
    let recipes_href = user_recipes_href(&user.name);

    Envelope::new(user_dto(user))
        .with_namespace(NAMESPACE, LINK_RELATIONS_URL)
        .with_control(rel::SELF, Control::link(href.clone()))
        .with_control(rel::COLLECTION, Control::link(users_href()))
        .with_control(rel::PROFILE, Control::link(USER_PROFILE))
        .with_control(
            rel::USER_RECIPES,
            Control::get(recipes_href, "Recipes of this user"),
        )
        .with_control(rel::EDIT, Control::put(href.clone(), "Edit this user", schema::user()))
        .with_control(rel::DELETE, Control::delete(href, "Delete this user"))
}

/// Envelope of the user collection, each item linking to itself and the user profile
pub fn user_collection(users: Vec<UserModel>) -> Envelope<Collection<UserDto>> {
    let items = users
        .into_iter()
        .map(|user| {
            let href = user_href(&user.name);
            Envelope::new(user_dto(user))
                .with_control(rel::SELF, Control::link(href))
                .with_control(rel::PROFILE, Control::link(USER_PROFILE))
        })
        .collect();

    Envelope::new(Collection::new(items))
        .with_namespace(NAMESPACE, LINK_RELATIONS_URL)
        .with_control(rel::SELF, Control::link(users_href()))
        .with_control(
            rel::ADD_USER,
            Control::post(users_href(), "Add a new user", schema::user()),
        )
}
