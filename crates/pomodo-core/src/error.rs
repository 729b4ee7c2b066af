//! Core error types for pomodo-core.
//!
//! The scheduler itself has no failure modes -- invalid commands are silent
//! no-ops. Errors only arise at the edges: loading configuration and talking
//! to the session-report endpoint.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Errors from the completed-session report collaborator.
///
/// These never propagate into the scheduler -- the relay logs them and
/// carries on.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The configured endpoint base URL is not a valid URL
    #[error("Invalid report endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request could not be sent or the response could not be read
    #[error("Report request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Report endpoint returned HTTP {status}")]
    Http { status: u16 },
}
