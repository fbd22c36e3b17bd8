//! Errors
//!
//! Failure kinds surfaced to the UI layer.

use thiserror::Error;

/// Rejected input when creating an item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("item description must not be empty")]
    EmptyDescription,
}

/// Embedded page configuration could not be read
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
