//! Server application models and type definitions.
//!
//! Application state shared by every handler and type aliases for the database models.

pub mod app;
pub mod db;
