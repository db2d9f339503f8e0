//! Repository port traits
//!
//! These traits define the interface for data access.
//! Implementations are provided by adapters (e.g., the in-memory seed store).

use async_trait::async_trait;

use crate::domain::entities::{City, State, StateId};
use crate::error::DomainError;

/// Repository for states and their cities
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// All states, in no particular order
    async fn list_states(&self) -> Result<Vec<State>, DomainError>;

    /// Find a state by ID
    async fn find_state(&self, id: StateId) -> Result<Option<State>, DomainError>;

    /// Cities belonging to a state; empty for an unknown state
    async fn cities_by_state(&self, state_id: StateId) -> Result<Vec<City>, DomainError>;
}
