//! Mason hypermedia envelope types.
//!
//! Every API response body is an [`Envelope`]: the resource fields flattened next to the
//! reserved `@controls`, `@namespaces` and `@error` keys. Link relation names live in [`rel`]
//! so the server and the client always agree on them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Media type of every Mason response
pub static MASON: &str = "application/vnd.mason+json";
/// Prefix used for cookbook specific link relations
pub static NAMESPACE: &str = "cookbook";
/// Documentation URL for the cookbook link relation namespace
pub static LINK_RELATIONS_URL: &str = "/cookbook/link-relations/";
/// Profile attached to every error envelope
pub static ERROR_PROFILE: &str = "/profiles/error/";
/// Profile attached to user items
pub static USER_PROFILE: &str = "/profiles/user/";

/// Link relation names used as `@controls` keys
pub mod rel {
    pub static SELF: &str = "self";
    pub static COLLECTION: &str = "collection";
    pub static PROFILE: &str = "profile";
    /// Owning user of a recipe or recipe collection
    pub static AUTHOR: &str = "author";
    pub static EDIT: &str = "edit";
    pub static DELETE: &str = "cookbook:delete";
    pub static USERS_ALL: &str = "cookbook:users-all";
    pub static ADD_USER: &str = "cookbook:add-user";
    pub static USER_RECIPES: &str = "cookbook:user-recipes";
    pub static ADD_RECIPE: &str = "cookbook:add-recipe";
    pub static INGREDIENTS_ALL: &str = "cookbook:ingredients-all";
    pub static ADD_INGREDIENT: &str = "cookbook:add-ingredient";
}

/// A described follow-up request available from a resource
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Control {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// JSON schema the request body must satisfy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub schema: Option<Value>,
}

impl Control {
    /// Plain link, method defaults to GET
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: None,
            encoding: None,
            title: None,
            schema: None,
        }
    }

    /// Explicit GET link to a collection
    pub fn get(href: impl Into<String>, title: &str) -> Self {
        Self {
            method: Some("GET".to_string()),
            encoding: Some("json".to_string()),
            ..Self::link(href).titled(title)
        }
    }

    pub fn post(href: impl Into<String>, title: &str, schema: Value) -> Self {
        Self {
            method: Some("POST".to_string()),
            encoding: Some("json".to_string()),
            schema: Some(schema),
            ..Self::link(href).titled(title)
        }
    }

    pub fn put(href: impl Into<String>, title: &str, schema: Value) -> Self {
        Self {
            method: Some("PUT".to_string()),
            encoding: Some("json".to_string()),
            schema: Some(schema),
            ..Self::link(href).titled(title)
        }
    }

    pub fn delete(href: impl Into<String>, title: &str) -> Self {
        Self {
            method: Some("DELETE".to_string()),
            ..Self::link(href).titled(title)
        }
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
}

/// Namespace declaration, `name` is the namespace's reference URL
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Namespace {
    pub name: String,
}

/// Contents of the `@error` key
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MasonError {
    #[serde(rename = "@message")]
    pub message: String,
    #[serde(rename = "@messages", default)]
    pub messages: Vec<String>,
}

impl MasonError {
    pub fn new(message: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            message: message.into(),
            messages,
        }
    }
}

/// A resource body wrapped with its hypermedia controls
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(flatten)]
    pub body: T,
    #[serde(rename = "@controls", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub controls: BTreeMap<String, Control>,
    #[serde(rename = "@namespaces", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub namespaces: BTreeMap<String, Namespace>,
    #[serde(rename = "@error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<MasonError>,
}

impl<T> Envelope<T> {
    pub fn new(body: T) -> Self {
        Self {
            body,
            controls: BTreeMap::new(),
            namespaces: BTreeMap::new(),
            error: None,
        }
    }

    /// Adds a control, replacing any previous control with the same relation
    pub fn with_control(mut self, relation: &str, control: Control) -> Self {
        self.controls.insert(relation.to_string(), control);
        self
    }

    pub fn with_namespace(mut self, prefix: &str, uri: &str) -> Self {
        self.namespaces.insert(
            prefix.to_string(),
            Namespace {
                name: uri.to_string(),
            },
        );
        self
    }

    pub fn with_error(mut self, error: MasonError) -> Self {
        self.error = Some(error);
        self
    }

    /// Looks up a control by relation name
    pub fn control(&self, relation: &str) -> Option<&Control> {
        self.controls.get(relation)
    }
}

/// Body of a collection envelope
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub items: Vec<Envelope<T>>,
}

impl<T> Collection<T> {
    pub fn new(items: Vec<Envelope<T>>) -> Self {
        Self { items }
    }
}
