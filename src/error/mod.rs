// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cklint.
//!
//! Load-time problems (missing or malformed configuration) and message
//! problems (nothing to lint) are errors. Rule failures are not: they are
//! collected as violations in a [`crate::rules::LintReport`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cklint operations.
#[derive(Error, Debug)]
pub enum CklintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Malformed configuration for '{key}': {message}")]
    Malformed { key: String, message: String },

    #[error("Unknown preset: '{name}'")]
    UnknownPreset { name: String },
}

impl ConfigError {
    /// Shorthand for a [`ConfigError::Malformed`] on the given key.
    pub fn malformed(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Malformed {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Commit-message-related errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,
}

/// Result type alias for cklint operations.
pub type Result<T> = std::result::Result<T, CklintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CklintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
