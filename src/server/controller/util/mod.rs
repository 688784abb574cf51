//! Extractors shared by the resource handlers.
//!
//! [`path`] resolves URL segments into database rows and [`body`] turns the request body into
//! JSON, both rejecting with the API error taxonomy.

pub mod body;
pub mod path;
