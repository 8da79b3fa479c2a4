//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `dashboard` - Query catalogue, result model, charts and rendered views

pub mod dashboard;
