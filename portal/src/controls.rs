//! Select control model
//!
//! A dropdown reduced to its id, ordered options and current value.

use serde::Serialize;

use crate::error::PortalError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// Shown but not selectable
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Empty-valued option carrying a prompt such as "Select City"
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new("", label)
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectControl {
    id: String,
    options: Vec<SelectOption>,
    value: String,
}

impl SelectControl {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            value: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Currently selected value; empty when the placeholder is selected
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    /// Replace every option; selection falls back to the first option
    pub fn replace_options(&mut self, options: Vec<SelectOption>) {
        self.value = options
            .first()
            .map(|o| o.value.clone())
            .unwrap_or_default();
        self.options = options;
    }

    /// Select an enabled option by value
    pub fn select(&mut self, value: &str) -> Result<(), PortalError> {
        match self.options.iter().find(|o| o.value == value && !o.disabled) {
            Some(option) => {
                self.value = option.value.clone();
                Ok(())
            }
            None => Err(PortalError::UnknownOption {
                control: self.id.clone(),
                value: value.to_string(),
            }),
        }
    }
}
