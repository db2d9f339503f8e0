//! Mock implementations of port traits

use async_trait::async_trait;

use crate::domain::entities::{City, State, StateId};
use crate::domain::ports::LocationRepository;
use crate::error::DomainError;

// ============================================================================
// Failing Location Repository
// ============================================================================

/// Every call fails as if the backing store were unreachable
pub struct FailingLocationRepository;

#[async_trait]
impl LocationRepository for FailingLocationRepository {
    async fn list_states(&self) -> Result<Vec<State>, DomainError> {
        Err(DomainError::Internal("location store unavailable".into()))
    }

    async fn find_state(&self, _id: StateId) -> Result<Option<State>, DomainError> {
        Err(DomainError::Internal("location store unavailable".into()))
    }

    async fn cities_by_state(&self, _state_id: StateId) -> Result<Vec<City>, DomainError> {
        Err(DomainError::Internal("location store unavailable".into()))
    }
}
