//! Cookbook: a hypermedia (Mason) REST API for users, recipes and ingredients, and a console
//! client that drives it.
//!
//! The `server` feature provides the axum application, the `client` feature the interactive
//! console client. Types in [`model`] are shared by both sides of the wire.

pub mod model;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "server")]
pub mod server;
