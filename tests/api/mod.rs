use axum::http::{header, Method, StatusCode};
use cookbook_test_utils::prelude::*;
use serde_json::json;

use crate::util::{app, assert_error, body_json, get, location, send, send_raw};

mod entry;
mod ingredient;
mod recipe;
mod user;
