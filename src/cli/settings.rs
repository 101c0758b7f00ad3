// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Runtime settings read from the environment.

use crate::error::{ConfigError, Result};
use crate::rules::OutputFormat;
use std::path::PathBuf;

/// Explicit configuration file path.
pub const CONFIG_ENV: &str = "CKLINT_CONFIG";
/// Report format: `text` or `json`.
pub const FORMAT_ENV: &str = "CKLINT_FORMAT";
/// Enables debug logging when set to a non-empty value other than `0`.
pub const DEBUG_ENV: &str = "CKLINT_DEBUG";

/// Settings for a lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Path to configuration file
    pub config: Option<PathBuf>,

    /// Output format for the report
    pub format: OutputFormat,

    /// Enable debug logging
    pub debug: bool,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through a lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = lookup(CONFIG_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let format = match lookup(FORMAT_ENV).filter(|f| !f.is_empty()) {
            Some(value) => value
                .parse::<OutputFormat>()
                .map_err(|message| ConfigError::malformed(FORMAT_ENV, message))?,
            None => OutputFormat::default(),
        };

        let debug = lookup(DEBUG_ENV).is_some_and(|v| !v.is_empty() && v != "0");

        Ok(Self {
            config,
            format,
            debug,
        })
    }
}
