//! Application layer
//!
//! Services coordinate between domain entities and ports.

pub mod compatibility_service;
pub mod location_service;

pub use compatibility_service::{ChartEntry, CompatibilityCheck, CompatibilityService};
pub use location_service::LocationService;
