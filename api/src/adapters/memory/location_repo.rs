//! In-memory location repository
//!
//! Loaded once from a JSON seed of states with nested cities; read-only
//! afterwards.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::domain::entities::{City, CityId, State, StateId};
use crate::domain::ports::LocationRepository;
use crate::error::DomainError;

const BUNDLED_SEED: &str = include_str!("../../../data/locations.json");

#[derive(Debug, Deserialize)]
struct Seed {
    states: Vec<SeedState>,
}

#[derive(Debug, Deserialize)]
struct SeedState {
    id: i64,
    name: String,
    #[serde(default)]
    cities: Vec<SeedCity>,
}

#[derive(Debug, Deserialize)]
struct SeedCity {
    id: i64,
    name: String,
}

pub struct InMemoryLocationRepository {
    states: HashMap<StateId, State>,
    /// Cities per state in seed order
    cities: HashMap<StateId, Vec<City>>,
}

impl InMemoryLocationRepository {
    /// Repository over the seed shipped with the binary
    pub fn bundled() -> Result<Self, DomainError> {
        Self::from_json(BUNDLED_SEED)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Internal(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let seed: Seed = serde_json::from_str(raw)
            .map_err(|e| DomainError::Validation(format!("Invalid location seed: {}", e)))?;
        Self::from_seed(seed)
    }

    fn from_seed(seed: Seed) -> Result<Self, DomainError> {
        let mut states = HashMap::new();
        let mut cities = HashMap::new();
        let mut state_names = HashSet::new();
        let mut city_ids = HashSet::new();

        for s in seed.states {
            let state_id = StateId(s.id);
            if states.contains_key(&state_id) {
                return Err(DomainError::Validation(format!(
                    "Duplicate state id {}",
                    s.id
                )));
            }
            if !state_names.insert(s.name.clone()) {
                return Err(DomainError::Validation(format!(
                    "Duplicate state name '{}'",
                    s.name
                )));
            }

            let mut state_cities = Vec::with_capacity(s.cities.len());
            for c in s.cities {
                if !city_ids.insert(c.id) {
                    return Err(DomainError::Validation(format!(
                        "Duplicate city id {}",
                        c.id
                    )));
                }
                state_cities.push(City {
                    id: CityId(c.id),
                    name: c.name,
                    state_id,
                });
            }

            states.insert(
                state_id,
                State {
                    id: state_id,
                    name: s.name,
                },
            );
            cities.insert(state_id, state_cities);
        }

        tracing::debug!(
            states = states.len(),
            cities = city_ids.len(),
            "location seed loaded"
        );
        Ok(Self { states, cities })
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn list_states(&self) -> Result<Vec<State>, DomainError> {
        Ok(self.states.values().cloned().collect())
    }

    async fn find_state(&self, id: StateId) -> Result<Option<State>, DomainError> {
        Ok(self.states.get(&id).cloned())
    }

    async fn cities_by_state(&self, state_id: StateId) -> Result<Vec<City>, DomainError> {
        Ok(self.cities.get(&state_id).cloned().unwrap_or_default())
    }
}
