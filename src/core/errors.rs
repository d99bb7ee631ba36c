/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 *
 * Resolution itself never fails: these errors only surface from the explicit
 * parsing and configuration APIs.
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission node parsing errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum NodeError {
    #[error("Permission node is empty")]
    #[diagnostic(
        code(node::empty),
        help("Provide at least one segment, e.g. 'plots' or 'plots.admin'.")
    )]
    Empty,

    #[error("Invalid permission node '{node}': empty segment at position {position}")]
    #[diagnostic(
        code(node::invalid_format),
        help("Segments are separated by single dots. Leading, trailing and doubled dots are not allowed.")
    )]
    InvalidNodeFormat { node: String, position: usize },
}

/// Handler configuration errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Failed to read configuration from {path}: {reason}")]
    #[diagnostic(
        code(config::io_error),
        help("Check that the file exists and is readable.")
    )]
    Io { path: String, reason: String },

    #[error("Failed to parse configuration: {reason}")]
    #[diagnostic(
        code(config::parse_error),
        help("Configuration is JSON. Capability flags are written as \"ONLINE_PERMISSIONS\".")
    )]
    Parse { reason: String },

    #[error("Invalid configuration: {reason}")]
    #[diagnostic(code(config::invalid), help("Review the configuration values."))]
    Invalid { reason: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            reason: err.to_string(),
        }
    }
}

/// Unified error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum PermissionError {
    #[error("Node error: {0}")]
    #[diagnostic(transparent)]
    Node(#[from] NodeError),

    #[error("Config error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for fallible permission APIs
pub type PermissionResult<T> = std::result::Result<T, PermissionError>;
