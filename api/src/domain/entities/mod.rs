//! Domain entities
//!
//! Locations are owned here; blood types come from the portal crate so the
//! chart served by the API and the evaluator used on pages share one table.

pub mod location;

pub use location::{City, CityId, State, StateId};
