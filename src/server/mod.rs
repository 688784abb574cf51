//! Server application core modules.
//!
//! This module contains the HTTP side of the cookbook: routing, resource handlers, Mason
//! envelope construction, request validation, and the repositories and services that talk to
//! the database.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod hypermedia;
pub mod model;
pub mod router;
pub mod schema;
pub mod service;
pub mod startup;
