//! Compatibility handlers

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::app::{ChartEntry, CompatibilityCheck};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub donor: String,
    pub recipient: String,
}

/// GET /api/compatibility
pub async fn get_chart(State(state): State<AppState>) -> Json<BTreeMap<&'static str, ChartEntry>> {
    Json(state.compatibility_service.chart())
}

/// GET /api/compatibility/check?donor=X&recipient=Y
///
/// Labels containing `+` must be sent percent-encoded (`%2B`); a bare `+`
/// decodes to a space and the pair is reported incompatible.
pub async fn check_compatibility(
    State(state): State<AppState>,
    Query(query): Query<CheckQuery>,
) -> Json<CompatibilityCheck> {
    Json(
        state
            .compatibility_service
            .check(&query.donor, &query.recipient),
    )
}
