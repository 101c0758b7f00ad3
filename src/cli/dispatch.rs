// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint run dispatch.

use crate::config::LintConfig;
use crate::error::{Result, ResultExt};
use crate::rules::{LintReport, RuleEngine};
use std::io::Read;

use super::settings::Settings;

/// Resolve the configuration for a run.
///
/// An explicit path wins, then the nearest config file, then the built-in
/// project configuration.
pub fn resolve_config(settings: &Settings) -> Result<LintConfig> {
    if let Some(ref path) = settings.config {
        return LintConfig::load_from(path);
    }

    LintConfig::discover()
}

/// Lint a commit message with the resolved configuration.
pub fn lint_message(settings: &Settings, message: &str) -> Result<LintReport> {
    let config = resolve_config(settings)?;
    RuleEngine::new(config).lint(message)
}

/// Read a commit message from `input`, lint it and print the report.
///
/// Returns whether the message is valid.
pub fn run(settings: &Settings, mut input: impl Read) -> Result<bool> {
    tracing::debug!("Running lint with settings: {:?}", settings);

    let mut message = String::new();
    input
        .read_to_string(&mut message)
        .context("Failed to read commit message")?;

    let report = lint_message(settings, &message)?;
    report.print(settings.format);

    Ok(report.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RuleName, RuleValue};
    use std::fs;
    use tempfile::TempDir;

    fn with_config(dir: &TempDir, content: &str) -> Settings {
        let path = dir.path().join("cklint.toml");
        fs::write(&path, content).unwrap();
        Settings {
            config: Some(path),
            ..Settings::default()
        }
    }

    #[test]
    fn test_resolve_explicit_config() {
        let dir = TempDir::new().unwrap();
        let settings = with_config(&dir, "[rules]\nheader-max-length = [2, \"always\", 10]\n");

        let config = resolve_config(&settings).unwrap();
        assert!(config.extends.is_empty());
        assert_eq!(
            config.rules.get(RuleName::HeaderMaxLength).unwrap().value,
            RuleValue::Length(10)
        );
    }

    #[test]
    fn test_resolve_missing_explicit_config() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            config: Some(dir.path().join("missing.toml")),
            ..Settings::default()
        };
        assert!(resolve_config(&settings).is_err());
    }

    #[test]
    fn test_lint_message_with_explicit_config() {
        let dir = TempDir::new().unwrap();
        let settings = with_config(&dir, "[rules]\nheader-max-length = [2, \"always\", 10]\n");

        let report = lint_message(&settings, "feat: add login").unwrap();
        assert!(!report.is_valid());
        assert!(report.has_violation(RuleName::HeaderMaxLength));
    }

    #[test]
    fn test_run_reports_validity() {
        let dir = TempDir::new().unwrap();
        let settings = with_config(&dir, "extends = [\"conventional\"]\n");

        assert!(run(&settings, "feat: add login".as_bytes()).unwrap());
        assert!(!run(&settings, "Feat: Add Login.".as_bytes()).unwrap());
    }
}
