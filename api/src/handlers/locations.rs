//! Location handlers
//!
//! Region and city listings for dependent dropdowns.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::domain::entities::{City, State as Region, StateId};
use crate::error::AppError;
use crate::AppState;

/// `{id, name}` pair rendered as one dropdown option
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub id: i64,
    pub name: String,
}

impl From<Region> for LocationResponse {
    fn from(state: Region) -> Self {
        Self {
            id: state.id.0,
            name: state.name,
        }
    }
}

impl From<City> for LocationResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id.0,
            name: city.name,
        }
    }
}

/// GET /api/states
pub async fn list_states(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let states = state.location_service.list_states().await?;
    Ok(Json(states.into_iter().map(Into::into).collect()))
}

/// GET /api/cities/:state_id
///
/// Cities of one state, sorted by name. Unknown states yield `[]`.
pub async fn list_cities(
    State(state): State<AppState>,
    Path(state_id): Path<i64>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let cities = state
        .location_service
        .cities_for_state(StateId(state_id))
        .await?;
    Ok(Json(cities.into_iter().map(Into::into).collect()))
}
