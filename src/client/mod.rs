//! Interactive console client for the cookbook API.
//!
//! The client starts at the API entry point and only ever follows the hypermedia controls the
//! server hands out. Menus are numbered lists read from a [`console::Console`], which is generic
//! over its input and output so whole sessions can be scripted.

pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod render;
