//! Notification surface
//!
//! Dismissible alerts stacked newest-first at the top of the page container.
//! Every alert expires on its own after the configured timeout; manual
//! dismissal cancels the pending expiry. Expiry tasks hold only a weak
//! reference to the container and are cancelled when it is dropped.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::config::DEFAULT_ALERT_TIMEOUT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub Uuid);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Alert severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            "danger" => Ok(Severity::Danger),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub dismissible: bool,
    pub created_at: DateTime<Utc>,
}

struct Entry {
    notification: Notification,
    expiry: CancellationToken,
}

struct Inner {
    alerts: Mutex<Vec<Entry>>,
    timeout: Duration,
    shutdown: CancellationToken,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// The page's alert container
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_TIMEOUT)
    }
}

impl NotificationCenter {
    pub fn new(timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                alerts: Mutex::new(Vec::new()),
                timeout,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    /// Insert an alert at the top and schedule its expiry
    pub fn show_alert(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let notification = Notification {
            id: NotificationId(Uuid::new_v4()),
            message: message.into(),
            severity,
            dismissible: true,
            created_at: Utc::now(),
        };
        let id = notification.id;
        let expiry = self.inner.shutdown.child_token();

        tracing::debug!(%id, %severity, message = %notification.message, "alert shown");
        self.lock().insert(
            0,
            Entry {
                notification,
                expiry: expiry.clone(),
            },
        );

        let timeout = self.inner.timeout;
        self.schedule(expiry, timeout, vec![id]);
        id
    }

    /// Remove an alert now. Returns false if it was already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        dismiss_in(&self.inner, id)
    }

    /// Expire every alert currently shown after `delay`.
    ///
    /// Alerts added later keep their own timers.
    pub fn expire_all_after(&self, delay: Duration) {
        let ids: Vec<_> = self.lock().iter().map(|e| e.notification.id).collect();
        if ids.is_empty() {
            return;
        }
        let token = self.inner.shutdown.child_token();
        self.schedule(token, delay, ids);
    }

    /// Snapshot, newest first
    pub fn active(&self) -> Vec<Notification> {
        self.lock().iter().map(|e| e.notification.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Entry>> {
        lock_alerts(&self.inner)
    }

    fn schedule(&self, token: CancellationToken, delay: Duration, ids: Vec<NotificationId>) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no async runtime; alerts will not expire on their own");
            return;
        };
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);

        runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if let Some(inner) = weak.upgrade() {
                        for id in ids {
                            dismiss_in(&inner, id);
                        }
                    }
                }
            }
        });
    }
}

fn lock_alerts(inner: &Inner) -> std::sync::MutexGuard<'_, Vec<Entry>> {
    inner.alerts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn dismiss_in(inner: &Inner, id: NotificationId) -> bool {
    let mut alerts = lock_alerts(inner);
    match alerts.iter().position(|e| e.notification.id == id) {
        Some(index) => {
            let entry = alerts.remove(index);
            entry.expiry.cancel();
            tracing::debug!(%id, "alert dismissed");
            true
        }
        None => false,
    }
}
