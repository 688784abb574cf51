//! Wire types shared by the server and the console client.
//!
//! Everything in here is plain serde data: DTOs for each resource and the Mason envelope
//! types that wrap them.

pub mod api;
pub mod ingredient;
pub mod mason;
pub mod recipe;
pub mod user;
