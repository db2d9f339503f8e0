//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod compatibility;
pub mod locations;

pub use compatibility::{check_compatibility, get_chart};
pub use locations::{list_cities, list_states};
