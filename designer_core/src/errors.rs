//! # Error Types
//!
//! Structured error types for designer_core. There are only two ways a
//! store operation can fail: the host dialog could not be shown, or reading,
//! writing or (de)serializing the design failed. Both leave the store's
//! state untouched.
//!
//! Cancelling a dialog is *not* an error; operations report it as `Ok(None)`.
//!
//! ## Example
//!
//! ```rust
//! use designer_core::errors::{DesignError, DesignResult};
//!
//! fn require_title(title: &str) -> DesignResult<()> {
//!     if title.is_empty() {
//!         return Err(DesignError::serialization("json", "canvas title is empty"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for designer_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Structured error type for store, persistence and configuration operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// The host could not display a file dialog
    #[error("Dialog error: '{title}' - {reason}")]
    Dialog { title: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON or XML serialization/deserialization error
    #[error("Serialization error ({format}): {reason}")]
    SerializationError { format: String, reason: String },

    /// Configuration file could not be parsed
    #[error("Config error: '{path}' - {reason}")]
    ConfigError { path: String, reason: String },
}

impl DesignError {
    /// Create a Dialog error
    pub fn dialog(title: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignError::Dialog {
            title: title.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(format: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignError::SerializationError {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::Dialog { .. } => "DIALOG_ERROR",
            DesignError::FileError { .. } => "FILE_ERROR",
            DesignError::SerializationError { .. } => "SERIALIZATION_ERROR",
            DesignError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }
}
