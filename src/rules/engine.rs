// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message linting.

use crate::commit::CommitMessage;
use crate::config::{LintConfig, RuleSet};
use crate::error::Result;

use super::builtin::check_rule;
use super::ignore::is_ignored;
use super::validator::LintReport;

/// Rule engine for linting commit messages.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: LintConfig,
    rules: RuleSet,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: LintConfig) -> Self {
        let rules = config.effective_rules();
        tracing::debug!("Rule engine ready with {} rules", rules.len());
        Self { config, rules }
    }

    /// The rules in force after applying presets.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Lint a parsed commit message.
    pub fn lint_message(&self, message: &CommitMessage) -> LintReport {
        let mut report = LintReport::new(message.raw.clone());

        for (&name, rule) in &self.rules {
            if let Some(violation) = check_rule(name, rule, message) {
                tracing::debug!("Rule {} failed: {}", name, violation.message);
                report.push(violation);
            }
        }

        report
    }

    /// Lint a commit message string.
    pub fn lint(&self, input: &str) -> Result<LintReport> {
        let message = CommitMessage::parse(input)?;

        if self.config.default_ignores && is_ignored(&message.header) {
            tracing::debug!("Ignoring message: {}", message.header);
            return Ok(LintReport::ignored(message.raw));
        }

        Ok(self.lint_message(&message))
    }
}
