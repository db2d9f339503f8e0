use std::env;
use std::time::Duration;

use crate::selector::StaleResponsePolicy;

/// Auto-expiry for alerts
pub const DEFAULT_ALERT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fallback after which a submit button re-enables itself
pub const DEFAULT_SUBMIT_FALLBACK: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the lookup service
    pub api_url: String,
    pub alert_timeout: Duration,
    pub submit_fallback: Duration,
    /// Per-request timeout for lookups; none by default
    pub request_timeout: Option<Duration>,
    pub stale_responses: StaleResponsePolicy,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            alert_timeout: DEFAULT_ALERT_TIMEOUT,
            submit_fallback: DEFAULT_SUBMIT_FALLBACK,
            request_timeout: None,
            stale_responses: StaleResponsePolicy::default(),
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            api_url: env::var("BLOODLINK_API_URL").unwrap_or(defaults.api_url),
            alert_timeout: secs_var("PORTAL_ALERT_TIMEOUT_SECS").unwrap_or(defaults.alert_timeout),
            submit_fallback: secs_var("PORTAL_SUBMIT_FALLBACK_SECS")
                .unwrap_or(defaults.submit_fallback),
            request_timeout: secs_var("PORTAL_REQUEST_TIMEOUT_SECS"),
            stale_responses: env::var("PORTAL_STALE_RESPONSES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.stale_responses),
        }
    }
}

fn secs_var(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
}
