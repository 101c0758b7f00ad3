// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint result types.

use crate::config::{RuleName, Severity};
use console::{style, Style};
use serde::Serialize;
use std::str::FromStr;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format '{}'", s)),
        }
    }
}

/// A failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    /// The rule that failed.
    pub rule: RuleName,
    /// Severity the rule was configured with.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Line number where the issue was found.
    pub line: Option<usize>,
}

impl RuleViolation {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the violation for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error() {
            style("✖").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error() {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{}   {} {}",
            prefix,
            self.message,
            code_style.apply_to(format!("[{}]", self.rule))
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n    {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    /// The message as given.
    pub input: String,
    /// Whether the message matched a default ignore and was not linted.
    pub ignored: bool,
    /// Error-severity violations.
    pub errors: Vec<RuleViolation>,
    /// Warning-severity violations.
    pub warnings: Vec<RuleViolation>,
}

impl LintReport {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ignored: false,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A report for a message that was skipped.
    pub fn ignored(input: impl Into<String>) -> Self {
        Self {
            ignored: true,
            ..Self::new(input)
        }
    }

    /// Record a violation under errors or warnings according to its severity.
    pub fn push(&mut self, violation: RuleViolation) {
        match violation.severity {
            Severity::Error => self.errors.push(violation),
            Severity::Warning => self.warnings.push(violation),
            Severity::Disabled => {}
        }
    }

    /// Check if the lint passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of violations.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Whether a violation of the given rule was reported.
    pub fn has_violation(&self, rule: RuleName) -> bool {
        self.errors
            .iter()
            .chain(&self.warnings)
            .any(|v| v.rule == rule)
    }

    /// Print the report to stdout.
    pub fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Json => println!("{:#}", self.to_json()),
            OutputFormat::Text => println!("{}", self.render_text()),
        }
    }

    /// Render the report as text.
    pub fn render_text(&self) -> String {
        let first_line = self.input.lines().next().unwrap_or("");
        let mut lines = vec![format!("{}   input: {}", style("⧗").dim(), first_line)];

        if self.ignored {
            lines.push(format!(
                "{}   ignored: merge, revert or fixup commit",
                style("✔").green().bold()
            ));
            return lines.join("\n");
        }

        for violation in self.errors.iter().chain(&self.warnings) {
            lines.push(violation.format());
        }

        let status = if self.is_valid() {
            style("✔").green().bold()
        } else {
            style("✖").red().bold()
        };
        lines.push(String::new());
        lines.push(format!("{}   {}", status, self.summary()));

        lines.join("\n")
    }

    /// Render the report as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "ignored": self.ignored,
            "input": self.input,
            "errors": self.errors,
            "warnings": self.warnings,
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.issue_count() == 0 {
            "no problems found".to_string()
        } else {
            format!(
                "found {} problems, {} warnings",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(rule: RuleName, severity: Severity) -> RuleViolation {
        RuleViolation {
            rule,
            severity,
            message: "subject may not be empty".to_string(),
            suggestion: None,
            line: Some(1),
        }
    }

    #[test]
    fn test_report_valid() {
        let report = LintReport::new("feat: test");
        assert!(report.is_valid());
        assert_eq!(report.issue_count(), 0);
        assert_eq!(report.summary(), "no problems found");
    }

    #[test]
    fn test_push_sorts_by_severity() {
        let mut report = LintReport::new("chore:");
        report.push(violation(RuleName::SubjectEmpty, Severity::Error));
        report.push(violation(RuleName::BodyLeadingBlank, Severity::Warning));
        report.push(violation(RuleName::HeaderTrim, Severity::Disabled));

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.has_violation(RuleName::BodyLeadingBlank));
        assert!(!report.has_violation(RuleName::HeaderTrim));
        assert_eq!(report.summary(), "found 1 problems, 1 warnings");
    }

    #[test]
    fn test_warnings_keep_report_valid() {
        let mut report = LintReport::new("feat: x\nbody");
        report.push(violation(RuleName::BodyLeadingBlank, Severity::Warning));
        assert!(report.is_valid());
    }

    #[test]
    fn test_violation_format() {
        let mut v = violation(RuleName::SubjectEmpty, Severity::Error);
        v.suggestion = Some("Describe the change after the colon".to_string());

        let formatted = v.format();
        assert!(formatted.contains("subject may not be empty"));
        assert!(formatted.contains("[subject-empty]"));
        assert!(formatted.contains("Describe the change after the colon"));
    }

    #[test]
    fn test_render_text() {
        let mut report = LintReport::new("chore:");
        report.push(violation(RuleName::SubjectEmpty, Severity::Error));

        let text = report.render_text();
        assert!(text.contains("input: chore:"));
        assert!(text.contains("[subject-empty]"));
        assert!(text.contains("found 1 problems, 0 warnings"));
    }

    #[test]
    fn test_render_ignored() {
        let text = LintReport::ignored("Merge branch 'main'").render_text();
        assert!(text.contains("ignored"));
        assert!(!text.contains("problems"));
    }

    #[test]
    fn test_to_json() {
        let mut report = LintReport::new("chore:");
        report.push(violation(RuleName::SubjectEmpty, Severity::Error));

        let json = report.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["rule"], "subject-empty");
        assert_eq!(json["errors"][0]["severity"], "error");
        assert_eq!(json["errors"][0]["line"], 1);
        assert!(json["errors"][0].get("suggestion").is_none());
    }

    #[test]
    fn test_pretty_json_matches_report() {
        let mut report = LintReport::new("feat: Add login");
        report.push(violation(RuleName::SubjectCase, Severity::Error));

        let pretty = format!("{:#}", report.to_json());
        assert!(pretty.contains("\n  \"valid\": false"));
        let parsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, report.to_json());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
