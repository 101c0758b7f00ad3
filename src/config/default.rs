// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in configuration: the project rule set and the conventional preset.

use crate::error::Result;

use super::loader::parse_config;
use super::schema::{
    Applicability, CaseStyle, LintConfig, RuleConfig, RuleName, RuleSet, RuleValue,
};

/// Commit types accepted by the project configuration.
pub const COMMIT_TYPES: [&str; 11] = [
    "feat",     // New feature
    "fix",      // Bug fix
    "docs",     // Documentation only
    "style",    // Formatting, whitespace
    "refactor", // Code change that neither fixes a bug nor adds a feature
    "perf",     // Performance improvement
    "test",     // Adding or updating tests
    "build",    // Build system or dependencies
    "ci",       // CI configuration
    "chore",    // Maintenance
    "revert",   // Revert a previous commit
];

/// The project configuration, in the same format as `cklint.toml`.
pub const PROJECT_CONFIG: &str = r#"# cklint configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

extends = ["conventional"]

[rules]
type-enum = [2, "always", [
    "feat",
    "fix",
    "docs",
    "style",
    "refactor",
    "perf",
    "test",
    "build",
    "ci",
    "chore",
    "revert",
]]
subject-case = [2, "always", "lower-case"]
subject-empty = [2, "never"]
subject-full-stop = [2, "never", "."]
type-case = [2, "always", "lower-case"]
type-empty = [2, "never"]
header-max-length = [2, "always", 100]
body-max-line-length = [2, "always", 100]
"#;

/// Load the built-in project configuration.
///
/// The literal goes through the same validation as user files, so a broken
/// literal surfaces as a malformed-configuration error rather than a panic.
pub fn load() -> Result<LintConfig> {
    tracing::debug!("Loading built-in project configuration");
    parse_config(PROJECT_CONFIG)
}

/// Rules of the conventional-commits base preset.
pub fn conventional_rules() -> RuleSet {
    use Applicability::{Always, Never};

    let types = COMMIT_TYPES.iter().map(|t| t.to_string()).collect();

    RuleSet::new()
        .with(
            RuleName::BodyLeadingBlank,
            RuleConfig::warning(Always, RuleValue::None),
        )
        .with(
            RuleName::BodyMaxLineLength,
            RuleConfig::error(Always, RuleValue::Length(100)),
        )
        .with(
            RuleName::FooterLeadingBlank,
            RuleConfig::warning(Always, RuleValue::None),
        )
        .with(
            RuleName::FooterMaxLineLength,
            RuleConfig::error(Always, RuleValue::Length(100)),
        )
        .with(
            RuleName::HeaderMaxLength,
            RuleConfig::error(Always, RuleValue::Length(100)),
        )
        .with(
            RuleName::HeaderTrim,
            RuleConfig::error(Always, RuleValue::None),
        )
        .with(
            RuleName::SubjectCase,
            RuleConfig::error(
                Never,
                RuleValue::Cases(vec![
                    CaseStyle::SentenceCase,
                    CaseStyle::StartCase,
                    CaseStyle::PascalCase,
                    CaseStyle::UpperCase,
                ]),
            ),
        )
        .with(
            RuleName::SubjectEmpty,
            RuleConfig::error(Never, RuleValue::None),
        )
        .with(
            RuleName::SubjectFullStop,
            RuleConfig::error(Never, RuleValue::Text(".".to_string())),
        )
        .with(
            RuleName::TypeCase,
            RuleConfig::error(Always, RuleValue::Cases(vec![CaseStyle::LowerCase])),
        )
        .with(RuleName::TypeEmpty, RuleConfig::error(Never, RuleValue::None))
        .with(RuleName::TypeEnum, RuleConfig::error(Always, RuleValue::Types(types)))
}
