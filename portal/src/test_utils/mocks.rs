//! In-memory port implementations for unit tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use tokio::sync::Notify;

use crate::confirm::Confirm;
use crate::error::LookupError;
use crate::ports::{Locality, LocalitySource, Region};

// ============================================================================
// Static source: answers immediately, records every request
// ============================================================================

#[derive(Default)]
pub struct StaticSource {
    by_region: HashMap<String, Vec<Locality>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region_id: &str, localities: Vec<Locality>) -> Self {
        self.by_region.insert(region_id.to_string(), localities);
        self
    }

    /// Region ids requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl LocalitySource for StaticSource {
    async fn localities(&self, region_id: &str) -> Result<Vec<Locality>, LookupError> {
        self.calls.write().unwrap().push(region_id.to_string());
        Ok(self.by_region.get(region_id).cloned().unwrap_or_default())
    }

    async fn regions(&self) -> Result<Vec<Region>, LookupError> {
        Ok(Vec::new())
    }
}

// ============================================================================
// Failing source
// ============================================================================

pub struct FailingSource {
    status: Option<u16>,
}

impl FailingSource {
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
        }
    }

    pub fn decode() -> Self {
        Self { status: None }
    }

    fn error(&self) -> LookupError {
        match self.status {
            Some(status) => LookupError::Status {
                status,
                message: "mock failure".to_string(),
            },
            None => LookupError::Decode("expected a sequence".to_string()),
        }
    }
}

#[async_trait]
impl LocalitySource for FailingSource {
    async fn localities(&self, _region_id: &str) -> Result<Vec<Locality>, LookupError> {
        Err(self.error())
    }

    async fn regions(&self) -> Result<Vec<Region>, LookupError> {
        Err(self.error())
    }
}

// ============================================================================
// Gated source: each region's response is held until the test releases it
// ============================================================================

#[derive(Default)]
pub struct GatedSource {
    by_region: HashMap<String, Vec<Locality>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<String>>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region_id: &str, localities: Vec<Locality>) -> Self {
        self.by_region.insert(region_id.to_string(), localities);
        self
    }

    fn gate(&self, region_id: &str) -> Arc<Notify> {
        self.gates
            .lock()
            .unwrap()
            .entry(region_id.to_string())
            .or_default()
            .clone()
    }

    /// Let the pending (or next) request for `region_id` complete
    pub fn release(&self, region_id: &str) {
        self.gate(region_id).notify_one();
    }

    /// Yield until at least `n` requests have been issued
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls.lock().unwrap().len() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl LocalitySource for GatedSource {
    async fn localities(&self, region_id: &str) -> Result<Vec<Locality>, LookupError> {
        let gate = self.gate(region_id);
        self.calls.lock().unwrap().push(region_id.to_string());
        gate.notified().await;
        Ok(self.by_region.get(region_id).cloned().unwrap_or_default())
    }

    async fn regions(&self) -> Result<Vec<Region>, LookupError> {
        Ok(Vec::new())
    }
}

// ============================================================================
// Scripted confirmation: fixed answer, records every question
// ============================================================================

pub struct ScriptedConfirm {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answer
    }
}
