//! Dependent region selector
//!
//! Keeps a locality dropdown in step with a region dropdown. A change to a
//! non-empty region puts the locality control into a loading state, fetches
//! the localities and then either lists them (idle) or shows an error
//! placeholder plus a danger alert (error). An empty region clears the list
//! without a request.
//!
//! State per handle: `Idle → Loading → {Idle, Error}`, any state → `Idle`
//! when the region is cleared.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::controls::{SelectControl, SelectOption};
use crate::notify::{NotificationCenter, Severity};
use crate::ports::{Locality, LocalitySource};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

/// What to do with a response that arrives after a newer region change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Drop it; the control only reflects the latest change
    #[default]
    Discard,
    /// Apply it anyway; whichever response lands last wins
    LastArrivalWins,
}

impl std::str::FromStr for StaleResponsePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discard" => Ok(StaleResponsePolicy::Discard),
            "last_arrival_wins" | "last-arrival-wins" => Ok(StaleResponsePolicy::LastArrivalWins),
            _ => Err(format!("Unknown stale response policy: {}", s)),
        }
    }
}

/// Placeholder and alert texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorLabels {
    pub prompt: String,
    pub loading: String,
    pub error: String,
    pub alert: String,
}

impl Default for SelectorLabels {
    fn default() -> Self {
        Self {
            prompt: "Select City".to_string(),
            loading: "Loading cities...".to_string(),
            error: "Error loading cities".to_string(),
            alert: "Error loading cities. Please try again.".to_string(),
        }
    }
}

/// Snapshot of one attached pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub region: Option<String>,
    pub localities: Vec<Locality>,
    pub status: SelectorStatus,
}

/// Factory for selector handles sharing a source and an alert container
pub struct RegionSelector<S: LocalitySource> {
    source: Arc<S>,
    notifications: NotificationCenter,
    labels: SelectorLabels,
    policy: StaleResponsePolicy,
}

impl<S: LocalitySource> RegionSelector<S> {
    pub fn new(source: Arc<S>, notifications: NotificationCenter) -> Self {
        Self {
            source,
            notifications,
            labels: SelectorLabels::default(),
            policy: StaleResponsePolicy::default(),
        }
    }

    pub fn with_labels(mut self, labels: SelectorLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_policy(mut self, policy: StaleResponsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bind a region control to a locality control.
    ///
    /// Each call yields an independent handle; attaching the same ids twice
    /// gives two handles that do not know about each other.
    pub fn attach(&self, region_control_id: &str, locality_control_id: &str) -> SelectorHandle<S> {
        let mut locality = SelectControl::new(locality_control_id);
        locality.replace_options(vec![SelectOption::placeholder(&self.labels.prompt)]);

        tracing::debug!(
            region = region_control_id,
            locality = locality_control_id,
            "selector attached"
        );

        SelectorHandle {
            region_control_id: region_control_id.to_string(),
            source: self.source.clone(),
            notifications: self.notifications.clone(),
            labels: self.labels.clone(),
            policy: self.policy,
            shared: Arc::new(Mutex::new(Shared {
                region: None,
                localities: Vec::new(),
                status: SelectorStatus::Idle,
                locality,
                generation: 0,
            })),
        }
    }
}

struct Shared {
    region: Option<String>,
    localities: Vec<Locality>,
    status: SelectorStatus,
    locality: SelectControl,
    /// Bumped on every region change
    generation: u64,
}

/// An attached region/locality pair
pub struct SelectorHandle<S: LocalitySource> {
    region_control_id: String,
    source: Arc<S>,
    notifications: NotificationCenter,
    labels: SelectorLabels,
    policy: StaleResponsePolicy,
    shared: Arc<Mutex<Shared>>,
}

impl<S: LocalitySource> Clone for SelectorHandle<S> {
    fn clone(&self) -> Self {
        Self {
            region_control_id: self.region_control_id.clone(),
            source: self.source.clone(),
            notifications: self.notifications.clone(),
            labels: self.labels.clone(),
            policy: self.policy,
            shared: self.shared.clone(),
        }
    }
}

impl<S: LocalitySource> SelectorHandle<S> {
    pub fn region_control_id(&self) -> &str {
        &self.region_control_id
    }

    pub fn locality_control_id(&self) -> String {
        self.lock().locality.id().to_string()
    }

    /// React to the region control changing to `value`
    pub async fn change_region(&self, value: &str) {
        let region = value.trim();

        if region.is_empty() {
            let mut shared = self.lock();
            shared.generation += 1;
            shared.region = None;
            shared.localities.clear();
            shared.status = SelectorStatus::Idle;
            shared
                .locality
                .replace_options(vec![SelectOption::placeholder(&self.labels.prompt)]);
            return;
        }

        let token = {
            let mut shared = self.lock();
            shared.generation += 1;
            shared.region = Some(region.to_string());
            shared.localities.clear();
            shared.status = SelectorStatus::Loading;
            shared
                .locality
                .replace_options(vec![SelectOption::placeholder(&self.labels.loading).disabled()]);
            shared.generation
        };

        let result = self.source.localities(region).await;

        let mut shared = self.lock();
        if shared.generation != token {
            match self.policy {
                StaleResponsePolicy::Discard => {
                    tracing::debug!(region, token, "discarding stale locality response");
                    return;
                }
                StaleResponsePolicy::LastArrivalWins => {
                    // The control follows the response, not the latest change
                    shared.region = Some(region.to_string());
                }
            }
        }

        match result {
            Ok(localities) => {
                let mut options = Vec::with_capacity(localities.len() + 1);
                options.push(SelectOption::placeholder(&self.labels.prompt));
                options.extend(
                    localities
                        .iter()
                        .map(|l| SelectOption::new(l.id.to_string(), &l.name)),
                );
                shared.locality.replace_options(options);
                shared.localities = localities;
                shared.status = SelectorStatus::Idle;
            }
            Err(e) => {
                tracing::warn!(region, error = %e, "error loading localities");
                shared
                    .locality
                    .replace_options(vec![SelectOption::placeholder(&self.labels.error)]);
                shared.localities.clear();
                shared.status = SelectorStatus::Error;
                drop(shared);
                self.notifications
                    .show_alert(self.labels.alert.clone(), Severity::Danger);
            }
        }
    }

    /// Pick a locality from the current list
    pub fn select_locality(&self, value: &str) -> Result<(), crate::error::PortalError> {
        self.lock().locality.select(value)
    }

    pub fn locality(&self) -> SelectControl {
        self.lock().locality.clone()
    }

    pub fn state(&self) -> SelectionState {
        let shared = self.lock();
        SelectionState {
            region: shared.region.clone(),
            localities: shared.localities.clone(),
            status: shared.status,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
