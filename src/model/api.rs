use serde::{Deserialize, Serialize};

/// Body of the API entry point at `/api/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ApiIndexDto {
    /// Human readable API title
    pub title: String,
}

/// Body of an error envelope
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// Path of the request that failed
    #[serde(default)]
    pub resource_url: String,
}
