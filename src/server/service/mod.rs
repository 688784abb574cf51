//! Service layer for business logic.
//!
//! Services translate database outcomes into the API error taxonomy (missing rows become
//! `NotFound`, unique violations become `Duplicate`) and run every multi-row mutation inside a
//! single transaction that is rolled back when any step fails.

pub mod ingredient;
pub mod recipe;
pub mod user;
