//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Ridgeline
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RidgelineError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid PO number component: {0}")]
    InvalidComponent(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Ridgeline operations
pub type Result<T> = std::result::Result<T, RidgelineError>;
