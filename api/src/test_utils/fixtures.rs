//! Test fixtures

use std::sync::Arc;

use crate::adapters::InMemoryLocationRepository;
use crate::app::{CompatibilityService, LocationService};
use crate::AppState;

/// Two states; Kerala's cities are deliberately out of name order
pub fn kerala_seed() -> &'static str {
    r#"{
        "states": [
            {"id": 1, "name": "Kerala", "cities": [
                {"id": 10, "name": "Kochi"},
                {"id": 11, "name": "Thrissur"},
                {"id": 12, "name": "Alappuzha"}
            ]},
            {"id": 2, "name": "Goa", "cities": [
                {"id": 20, "name": "Panaji"}
            ]}
        ]
    }"#
}

/// Application state over [`kerala_seed`]
pub fn test_state() -> AppState {
    let repo = InMemoryLocationRepository::from_json(kerala_seed())
        .expect("fixture seed should be valid");
    AppState {
        location_service: Arc::new(LocationService::new(Arc::new(repo))),
        compatibility_service: Arc::new(CompatibilityService::new()),
    }
}
