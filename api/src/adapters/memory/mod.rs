//! In-memory adapter
//!
//! Seed-backed implementation of the location repository.

pub mod location_repo;

pub use location_repo::InMemoryLocationRepository;
