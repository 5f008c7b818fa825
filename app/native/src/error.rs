//! Error types for Dashgrid.
//!
//! This module provides the application-wide error type used by the CLI.
//! Library operations return their own narrower errors (`ConfigError`,
//! `LayoutError`), which convert into this one.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::layout::LayoutError;

/// Errors that can occur during command execution.
///
/// This enum implements `Serialize` so that failures can be reported as
/// structured JSON by commands running in `--json` mode.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum DashgridError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Layout operation failed.
    #[error("Layout error: {0}")]
    LayoutError(String),
    /// The layout has problems reported by `check`.
    #[error("Layout check failed: {0}")]
    CheckFailed(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for DashgridError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for DashgridError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<ConfigError> for DashgridError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<LayoutError> for DashgridError {
    fn from(err: LayoutError) -> Self { Self::LayoutError(err.to_string()) }
}

impl From<String> for DashgridError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for DashgridError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
