//! BloodLink portal
//!
//! Headless presentation model for the BloodLink donation portal.
//! Controls, alerts and forms are plain values; the only I/O is the
//! locality lookup over HTTP.
//!
//! - `compatibility`: donor → recipient eligibility
//! - `selector`: region → locality dependent dropdown
//! - `notify`, `forms`, `export`, `dates`, `confirm`: page behaviors
//! - `page`: wires the above to element ids

pub mod blood_type;
pub mod client;
pub mod compatibility;
pub mod config;
pub mod confirm;
pub mod controls;
pub mod dates;
pub mod error;
pub mod export;
pub mod forms;
pub mod notify;
pub mod page;
pub mod ports;
pub mod selector;

#[cfg(test)]
mod test_utils;

pub use blood_type::BloodType;
pub use client::LookupClient;
pub use compatibility::{is_compatible, CompatibilityTable};
pub use config::PortalConfig;
pub use confirm::{confirm_delete, Confirm, TerminalConfirm, DEFAULT_DELETE_MESSAGE};
pub use controls::{SelectControl, SelectOption};
pub use dates::{age_on, calculate_age, format_date};
pub use error::{LookupError, PortalError};
pub use export::{export_table_to_csv, CsvDownload, Table, TableCell};
pub use forms::{Field, FieldKind, Form, SubmitButton, SubmitOutcome, ValidityError};
pub use notify::{Notification, NotificationCenter, NotificationId, Severity};
pub use page::Page;
pub use ports::{Locality, LocalityId, LocalitySource, Region};
pub use selector::{
    RegionSelector, SelectionState, SelectorHandle, SelectorLabels, SelectorStatus,
    StaleResponsePolicy,
};
