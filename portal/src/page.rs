//! Page wiring
//!
//! Connects the page behaviors to element ids: the known state/city pairs get
//! a selector, server-rendered alerts expire after the alert timeout, and a
//! change on the date-of-birth field updates the age field.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::PortalConfig;
use crate::dates::age_on;
use crate::error::PortalError;
use crate::forms::SubmitButton;
use crate::notify::{NotificationCenter, Severity};
use crate::ports::LocalitySource;
use crate::selector::{RegionSelector, SelectorHandle};

/// Region/locality id pairs wired up on every page that has them
pub const KNOWN_SELECTOR_PAIRS: [(&str, &str); 2] =
    [("state_id", "city_id"), ("camp_state_id", "camp_city_id")];

pub const DOB_FIELD: &str = "dob";
pub const AGE_FIELD: &str = "age";

pub struct Page<S: LocalitySource> {
    element_ids: HashSet<String>,
    config: PortalConfig,
    notifications: NotificationCenter,
    selectors: Vec<SelectorHandle<S>>,
    age: Option<i32>,
}

impl<S: LocalitySource> Page<S> {
    pub fn new<I, T>(element_ids: I, config: PortalConfig) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let notifications = NotificationCenter::new(config.alert_timeout);
        Self {
            element_ids: element_ids.into_iter().map(Into::into).collect(),
            config,
            notifications,
            selectors: Vec::new(),
            age: None,
        }
    }

    /// An alert rendered by the server with the page
    pub fn with_flash(self, message: &str, severity: Severity) -> Self {
        self.notifications.show_alert(message, severity);
        self
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.element_ids.contains(id)
    }

    /// Attach selectors for the known pairs present on the page and schedule
    /// expiry of the alerts rendered with it. Returns how many selectors were
    /// attached.
    pub fn init(&mut self, source: Arc<S>) -> usize {
        let selector = RegionSelector::new(source, self.notifications.clone())
            .with_policy(self.config.stale_responses);

        for (region, locality) in KNOWN_SELECTOR_PAIRS {
            if self.has_element(region) && self.has_element(locality) {
                self.selectors.push(selector.attach(region, locality));
            }
        }

        self.notifications.expire_all_after(self.config.alert_timeout);
        tracing::debug!(selectors = self.selectors.len(), "page initialised");
        self.selectors.len()
    }

    /// Dispatch a change event for element `id`
    pub async fn handle_change(
        &mut self,
        id: &str,
        value: &str,
        today: NaiveDate,
    ) -> Result<(), PortalError> {
        if id == DOB_FIELD {
            if self.has_element(AGE_FIELD) {
                self.age = Some(age_on(value, today)?);
            }
            return Ok(());
        }

        if let Some(handle) = self.selector(id) {
            handle.change_region(value).await;
        }
        Ok(())
    }

    /// Selector whose region control is `region_control_id`
    pub fn selector(&self, region_control_id: &str) -> Option<&SelectorHandle<S>> {
        self.selectors
            .iter()
            .find(|h| h.region_control_id() == region_control_id)
    }

    pub fn selectors(&self) -> &[SelectorHandle<S>] {
        &self.selectors
    }

    /// Submit button that re-enables after the configured fallback
    pub fn submit_button(&self, label: impl Into<String>) -> SubmitButton {
        SubmitButton::with_fallback(label, self.config.submit_fallback)
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Value of the age field, once derived from a date of birth
    pub fn age(&self) -> Option<i32> {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{locality, springfield, FailingSource, StaticSource};
    use std::time::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[tokio::test]
    async fn init_attaches_pairs_present_on_page() {
        let mut page: Page<StaticSource> = Page::new(
            ["state_id", "city_id", "camp_state_id"],
            PortalConfig::default(),
        );
        let attached = page.init(Arc::new(StaticSource::new()));

        assert_eq!(attached, 1);
        assert!(page.selector("state_id").is_some());
        assert!(page.selector("camp_state_id").is_none());
    }

    #[tokio::test]
    async fn init_attaches_both_known_pairs() {
        let mut page: Page<StaticSource> = Page::new(
            ["state_id", "city_id", "camp_state_id", "camp_city_id"],
            PortalConfig::default(),
        );
        assert_eq!(page.init(Arc::new(StaticSource::new())), 2);
        assert_eq!(page.selectors()[1].locality_control_id(), "camp_city_id");
    }

    #[tokio::test]
    async fn change_event_routes_to_selector() {
        let source = Arc::new(
            StaticSource::new()
                .with_region("1", vec![springfield()])
                .with_region("2", vec![locality("5", "Ogdenville")]),
        );
        let mut page = Page::new(
            ["state_id", "city_id", "camp_state_id", "camp_city_id"],
            PortalConfig::default(),
        );
        page.init(source.clone());

        page.handle_change("camp_state_id", "2", today()).await.unwrap();

        assert_eq!(source.calls(), vec!["2".to_string()]);
        let camp = page.selector("camp_state_id").unwrap().locality();
        assert_eq!(camp.labels(), vec!["Select City", "Ogdenville"]);
        let home = page.selector("state_id").unwrap().locality();
        assert_eq!(home.labels(), vec!["Select City"]);
    }

    #[tokio::test]
    async fn unrelated_change_is_ignored() {
        let source = Arc::new(StaticSource::new());
        let mut page = Page::new(["state_id", "city_id"], PortalConfig::default());
        page.init(source.clone());

        page.handle_change("blood_group", "O+", today()).await.unwrap();
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn dob_change_sets_age() {
        let mut page: Page<StaticSource> =
            Page::new(["dob", "age"], PortalConfig::default());

        page.handle_change("dob", "1996-10-17", today()).await.unwrap();
        assert_eq!(page.age(), Some(29));

        assert!(page.handle_change("dob", "garbage", today()).await.is_err());
    }

    #[tokio::test]
    async fn dob_without_age_field_is_noop() {
        let mut page: Page<StaticSource> = Page::new(["dob"], PortalConfig::default());
        page.handle_change("dob", "1996-10-17", today()).await.unwrap();
        assert_eq!(page.age(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn flash_alerts_expire_after_init() {
        let mut page: Page<FailingSource> = Page::new(["state_id", "city_id"], PortalConfig::default())
            .with_flash("Registration successful", Severity::Success);
        assert_eq!(page.notifications().len(), 1);

        page.init(Arc::new(FailingSource::status(500)));
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(page.notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_button_uses_configured_fallback() {
        let config = PortalConfig {
            submit_fallback: Duration::from_secs(3),
            ..PortalConfig::default()
        };
        let page: Page<StaticSource> = Page::new(["donate-form"], config);
        let button = page.submit_button("Donate");

        button.begin_loading();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(button.is_loading());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!button.is_loading());
        assert_eq!(button.state().label, "Donate");
    }

    #[tokio::test]
    async fn lookup_failure_surfaces_on_page_notifications() {
        let mut page = Page::new(["state_id", "city_id"], PortalConfig::default());
        page.init(Arc::new(FailingSource::status(500)));

        page.handle_change("state_id", "1", today()).await.unwrap();
        let alerts = page.notifications().active();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Danger);
    }
}
