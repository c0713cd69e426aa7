//! Core error types for rapport-core.
//!
//! This module defines the error hierarchy using thiserror. Hardware
//! feedback errors are produced by devices and absorbed by the sequencer,
//! so they never reach [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rapport-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

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

    /// Home/config directory could not be resolved or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Failures reported by a hardware feedback capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HapticError {
    /// Device lacks a haptic engine
    #[error("haptic feedback is unavailable on this device")]
    Unavailable,

    /// The platform refused access
    #[error("haptic feedback permission denied")]
    PermissionDenied,

    /// Transient driver failure
    #[error("haptic driver error: {0}")]
    Driver(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Pattern name not present in the catalog
    #[error("Unknown feedback pattern: '{0}'")]
    UnknownPattern(String),

    /// Social event name could not be parsed
    #[error("Unknown social event: '{0}'")]
    UnknownEvent(String),

    /// Tier name could not be parsed
    #[error("Unknown tier: '{0}'")]
    UnknownTier(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
