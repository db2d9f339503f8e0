//! Location service
//!
//! Region and city listings backing the dependent selector.

use std::sync::Arc;

use crate::domain::entities::{City, State, StateId};
use crate::domain::ports::LocationRepository;
use crate::error::AppError;

pub struct LocationService<LR: LocationRepository> {
    location_repo: Arc<LR>,
}

impl<LR: LocationRepository> LocationService<LR> {
    pub fn new(location_repo: Arc<LR>) -> Self {
        Self { location_repo }
    }

    /// All states, sorted by name
    pub async fn list_states(&self) -> Result<Vec<State>, AppError> {
        let mut states = self.location_repo.list_states().await?;
        states.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(states)
    }

    /// Cities of a state, sorted by name.
    ///
    /// An unknown state has no cities; callers get an empty list rather
    /// than a 404.
    pub async fn cities_for_state(&self, state_id: StateId) -> Result<Vec<City>, AppError> {
        if self.location_repo.find_state(state_id).await?.is_none() {
            tracing::debug!(%state_id, "cities requested for unknown state");
            return Ok(Vec::new());
        }

        let mut cities = self.location_repo.cities_by_state(state_id).await?;
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cities)
    }
}
