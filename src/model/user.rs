use serde::{Deserialize, Serialize};

/// A cookbook user, as sent to and returned by the API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub name: String,
    pub email: String,
    pub address: String,
    pub password: String,
}
