//! Error types for the portal
//!
//! - `LookupError`: lookup service failures (transport, status, payload)
//! - `PortalError`: invalid input handed to a page helper

use thiserror::Error;

/// Lookup service errors
///
/// The selector collapses all three into one user-visible error state;
/// they stay distinct here for logging.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Lookup service error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Errors raised by portal helpers
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown option '{value}' for control '{control}'")]
    UnknownOption { control: String, value: String },

    #[error("Invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
