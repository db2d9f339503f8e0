//! Form validation gate and submit-button loading state
//!
//! Forms that opt into validation are checked against the constraints
//! declared on their fields before submission; a failing form is blocked and
//! marked as validated so invalid fields can be highlighted. A submitted
//! form's button shows a spinner label until the page reloads, or until the
//! fallback timer restores it.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::DEFAULT_SUBMIT_FALLBACK;
use crate::error::PortalError;

pub const PROCESSING_LABEL: &str = "Processing...";

/// Declared input kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Number,
    Date,
}

/// Why a field fails its constraints
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidityError {
    #[error("Please fill out this field")]
    ValueMissing,

    #[error("Please use at least {min} characters")]
    TooShort { min: usize },

    #[error("Please use no more than {max} characters")]
    TooLong { max: usize },

    #[error("Please match the requested format")]
    PatternMismatch,

    #[error("Please enter a valid {0}")]
    TypeMismatch(&'static str),

    #[error("Value must be greater than or equal to {min}")]
    RangeUnderflow { min: f64 },

    #[error("Value must be less than or equal to {max}")]
    RangeOverflow { max: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pattern: Option<Regex>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Whole-value pattern, like the HTML `pattern` attribute
    pub fn pattern(mut self, pattern: &str) -> Result<Self, PortalError> {
        self.pattern = Some(Regex::new(&format!("^(?:{})$", pattern))?);
        Ok(self)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn check(&self) -> Result<(), ValidityError> {
        let value = self.value.as_str();

        if value.is_empty() {
            return if self.required {
                Err(ValidityError::ValueMissing)
            } else {
                Ok(())
            };
        }

        let chars = value.chars().count();
        if let Some(min) = self.min_length {
            if chars < min {
                return Err(ValidityError::TooShort { min });
            }
        }
        if let Some(max) = self.max_length {
            if chars > max {
                return Err(ValidityError::TooLong { max });
            }
        }

        match self.kind {
            FieldKind::Text => {}
            FieldKind::Email => {
                if !looks_like_email(value) {
                    return Err(ValidityError::TypeMismatch("email address"));
                }
            }
            FieldKind::Date => {
                if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                    return Err(ValidityError::TypeMismatch("date"));
                }
            }
            FieldKind::Number => {
                let number: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| ValidityError::TypeMismatch("number"))?;
                if let Some(min) = self.min {
                    if number < min {
                        return Err(ValidityError::RangeUnderflow { min });
                    }
                }
                if let Some(max) = self.max {
                    if number > max {
                        return Err(ValidityError::RangeOverflow { max });
                    }
                }
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return Err(ValidityError::PatternMismatch);
            }
        }

        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Submission may proceed with these name/value pairs
    Submitted(Vec<(String, String)>),
    /// Validation failed; nothing was sent
    Blocked(Vec<(String, ValidityError)>),
}

pub struct Form {
    pub id: String,
    fields: Vec<Field>,
    needs_validation: bool,
    was_validated: bool,
    submit_button: Option<SubmitButton>,
}

impl Form {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
            needs_validation: false,
            was_validated: false,
            submit_button: None,
        }
    }

    /// Opt into the client-side validation gate
    pub fn needs_validation(mut self) -> Self {
        self.needs_validation = true;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn submit_button(mut self, button: SubmitButton) -> Self {
        self.submit_button = Some(button);
        self
    }

    pub fn button(&self) -> Option<&SubmitButton> {
        self.submit_button.as_ref()
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    pub fn check_validity(&self) -> bool {
        self.fields.iter().all(|f| f.check().is_ok())
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.needs_validation {
            self.was_validated = true;
            let invalid: Vec<_> = self
                .fields
                .iter()
                .filter_map(|f| f.check().err().map(|e| (f.name.clone(), e)))
                .collect();

            if !invalid.is_empty() {
                tracing::debug!(form = %self.id, invalid = invalid.len(), "submission blocked");
                return SubmitOutcome::Blocked(invalid);
            }
        }

        if let Some(button) = &self.submit_button {
            button.begin_loading();
        }

        SubmitOutcome::Submitted(
            self.fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    pub disabled: bool,
}

struct ButtonInner {
    state: Mutex<ButtonState>,
    /// Label to restore; set while loading
    original_label: Mutex<Option<String>>,
    fallback: Duration,
    timer: Mutex<Option<CancellationToken>>,
}

impl Drop for ButtonInner {
    fn drop(&mut self) {
        if let Some(token) = lock(&self.timer).take() {
            token.cancel();
        }
    }
}

/// A form's submit button
#[derive(Clone)]
pub struct SubmitButton {
    inner: Arc<ButtonInner>,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_fallback(label, DEFAULT_SUBMIT_FALLBACK)
    }

    pub fn with_fallback(label: impl Into<String>, fallback: Duration) -> Self {
        Self {
            inner: Arc::new(ButtonInner {
                state: Mutex::new(ButtonState {
                    label: label.into(),
                    disabled: false,
                }),
                original_label: Mutex::new(None),
                fallback,
                timer: Mutex::new(None),
            }),
        }
    }

    pub fn state(&self) -> ButtonState {
        lock(&self.inner.state).clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.inner.original_label).is_some()
    }

    /// Disable and show the processing label; restore after the fallback delay
    pub fn begin_loading(&self) {
        {
            let mut original = lock(&self.inner.original_label);
            let mut state = lock(&self.inner.state);
            if original.is_none() {
                *original = Some(state.label.clone());
            }
            state.label = PROCESSING_LABEL.to_string();
            state.disabled = true;
        }

        let token = CancellationToken::new();
        if let Some(previous) = lock(&self.inner.timer).replace(token.clone()) {
            previous.cancel();
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no async runtime; submit button will stay disabled until reset");
            return;
        };
        let weak: Weak<ButtonInner> = Arc::downgrade(&self.inner);
        let fallback = self.inner.fallback;

        runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(fallback) => {
                    if let Some(inner) = weak.upgrade() {
                        tracing::debug!("submit fallback elapsed; re-enabling button");
                        restore(&inner);
                    }
                }
            }
        });
    }

    /// Restore immediately and cancel the fallback timer
    pub fn reset(&self) {
        if let Some(token) = lock(&self.inner.timer).take() {
            token.cancel();
        }
        restore(&self.inner);
    }
}

fn restore(inner: &ButtonInner) {
    let mut original = lock(&inner.original_label);
    let mut state = lock(&inner.state);
    if let Some(label) = original.take() {
        state.label = label;
    }
    state.disabled = false;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
