// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! A configuration is a map from [`RuleName`] to [`RuleConfig`]. Every rule
//! carries a severity, an applicability (`always` / `never`) and a
//! rule-specific value whose kind is fixed per rule name.

use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Names of the rules the engine knows how to evaluate.
///
/// Declaration order is alphabetical; rule sets iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleName {
    BodyLeadingBlank,
    BodyMaxLineLength,
    FooterLeadingBlank,
    FooterMaxLineLength,
    HeaderMaxLength,
    HeaderTrim,
    SubjectCase,
    SubjectEmpty,
    SubjectFullStop,
    TypeCase,
    TypeEmpty,
    TypeEnum,
}

impl RuleName {
    /// All known rules.
    pub const ALL: [RuleName; 12] = [
        RuleName::BodyLeadingBlank,
        RuleName::BodyMaxLineLength,
        RuleName::FooterLeadingBlank,
        RuleName::FooterMaxLineLength,
        RuleName::HeaderMaxLength,
        RuleName::HeaderTrim,
        RuleName::SubjectCase,
        RuleName::SubjectEmpty,
        RuleName::SubjectFullStop,
        RuleName::TypeCase,
        RuleName::TypeEmpty,
        RuleName::TypeEnum,
    ];

    /// Get the rule name as it appears in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::BodyLeadingBlank => "body-leading-blank",
            RuleName::BodyMaxLineLength => "body-max-line-length",
            RuleName::FooterLeadingBlank => "footer-leading-blank",
            RuleName::FooterMaxLineLength => "footer-max-line-length",
            RuleName::HeaderMaxLength => "header-max-length",
            RuleName::HeaderTrim => "header-trim",
            RuleName::SubjectCase => "subject-case",
            RuleName::SubjectEmpty => "subject-empty",
            RuleName::SubjectFullStop => "subject-full-stop",
            RuleName::TypeCase => "type-case",
            RuleName::TypeEmpty => "type-empty",
            RuleName::TypeEnum => "type-enum",
        }
    }

    /// The kind of value this rule takes.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            RuleName::BodyLeadingBlank
            | RuleName::FooterLeadingBlank
            | RuleName::HeaderTrim
            | RuleName::SubjectEmpty
            | RuleName::TypeEmpty => ValueKind::None,
            RuleName::BodyMaxLineLength
            | RuleName::FooterMaxLineLength
            | RuleName::HeaderMaxLength => ValueKind::Length,
            RuleName::SubjectCase | RuleName::TypeCase => ValueKind::Cases,
            RuleName::SubjectFullStop => ValueKind::Text,
            RuleName::TypeEnum => ValueKind::Types,
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown rule '{}'", s))
    }
}

/// How a failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule is not evaluated.
    Disabled,
    /// Reported, but the message is still valid.
    Warning,
    /// Reported, and the message is invalid.
    Error,
}

impl Severity {
    /// Convert a numeric level (`0`, `1`, `2`) to a severity.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Disabled),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "disabled" => Ok(Severity::Disabled),
            "warn" | "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(format!("unknown severity '{}'", s)),
        }
    }
}

/// Whether the rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    Always,
    Never,
}

impl Applicability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }
}

impl FromStr for Applicability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Applicability::Always),
            "never" => Ok(Applicability::Never),
            _ => Err(format!(
                "unknown applicability '{}' (expected 'always' or 'never')",
                s
            )),
        }
    }
}

/// Text case styles understood by the `*-case` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    LowerCase,
    UpperCase,
    CamelCase,
    KebabCase,
    PascalCase,
    SentenceCase,
    SnakeCase,
    StartCase,
}

impl CaseStyle {
    /// All supported case styles.
    pub const ALL: [CaseStyle; 8] = [
        CaseStyle::LowerCase,
        CaseStyle::UpperCase,
        CaseStyle::CamelCase,
        CaseStyle::KebabCase,
        CaseStyle::PascalCase,
        CaseStyle::SentenceCase,
        CaseStyle::SnakeCase,
        CaseStyle::StartCase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::LowerCase => "lower-case",
            CaseStyle::UpperCase => "upper-case",
            CaseStyle::CamelCase => "camel-case",
            CaseStyle::KebabCase => "kebab-case",
            CaseStyle::PascalCase => "pascal-case",
            CaseStyle::SentenceCase => "sentence-case",
            CaseStyle::SnakeCase => "snake-case",
            CaseStyle::StartCase => "start-case",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::ALL
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| format!("unknown case style '{}'", s))
    }
}

/// The shape of value a rule takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    None,
    Types,
    Cases,
    Length,
    Text,
}

impl ValueKind {
    /// Human-readable description used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            ValueKind::None => "no value",
            ValueKind::Types => "a list of type names",
            ValueKind::Cases => "a case style or a list of case styles",
            ValueKind::Length => "a non-negative integer",
            ValueKind::Text => "a string",
        }
    }
}

/// Rule-specific parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValue {
    None,
    Types(Vec<String>),
    Cases(Vec<CaseStyle>),
    Length(usize),
    Text(String),
}

impl RuleValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            RuleValue::None => ValueKind::None,
            RuleValue::Types(_) => ValueKind::Types,
            RuleValue::Cases(_) => ValueKind::Cases,
            RuleValue::Length(_) => ValueKind::Length,
            RuleValue::Text(_) => ValueKind::Text,
        }
    }
}

/// Configuration of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: RuleValue,
}

impl RuleConfig {
    pub fn new(severity: Severity, applicability: Applicability, value: RuleValue) -> Self {
        Self {
            severity,
            applicability,
            value,
        }
    }

    /// An `error`-severity rule with the given applicability and value.
    pub fn error(applicability: Applicability, value: RuleValue) -> Self {
        Self::new(Severity::Error, applicability, value)
    }

    /// A `warning`-severity rule with the given applicability and value.
    pub fn warning(applicability: Applicability, value: RuleValue) -> Self {
        Self::new(Severity::Warning, applicability, value)
    }

    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Disabled
    }
}

/// An ordered, name-keyed set of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet(BTreeMap<RuleName, RuleConfig>);

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, replacing any previous entry for the same name.
    pub fn insert(&mut self, name: RuleName, rule: RuleConfig) -> Option<RuleConfig> {
        self.0.insert(name, rule)
    }

    /// Builder-style [`RuleSet::insert`].
    pub fn with(mut self, name: RuleName, rule: RuleConfig) -> Self {
        self.insert(name, rule);
        self
    }

    pub fn get(&self, name: RuleName) -> Option<&RuleConfig> {
        self.0.get(&name)
    }

    pub fn contains(&self, name: RuleName) -> bool {
        self.0.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate rules in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, RuleName, RuleConfig> {
        self.0.iter()
    }

    /// Overlay another rule set on this one; entries from `other` win.
    pub fn extend(&mut self, other: RuleSet) {
        self.0.extend(other.0);
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = (&'a RuleName, &'a RuleConfig);
    type IntoIter = btree_map::Iter<'a, RuleName, RuleConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Named rule bundles a configuration can extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// The conventional-commits base rules.
    Conventional,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Conventional => "conventional",
        }
    }

    /// The rules this preset contributes.
    pub fn rules(&self) -> RuleSet {
        match self {
            Preset::Conventional => super::default::conventional_rules(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conventional" | "config-conventional" | "@commitlint/config-conventional" => {
                Ok(Preset::Conventional)
            }
            _ => Err(s.to_string()),
        }
    }
}

/// The main configuration structure for cklint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    /// Presets whose rules this configuration builds on, applied in order.
    pub extends: Vec<Preset>,

    /// Skip merge, revert and fixup commits.
    pub default_ignores: bool,

    /// Rules declared by this configuration.
    pub rules: RuleSet,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            extends: Vec::new(),
            default_ignores: true,
            rules: RuleSet::new(),
        }
    }
}

impl LintConfig {
    /// Load the built-in project configuration.
    pub fn load() -> crate::error::Result<Self> {
        super::default::load()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Load the nearest configuration file, falling back to the built-in one.
    pub fn discover() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// The rules in force: presets first, then this configuration's own rules.
    pub fn effective_rules(&self) -> RuleSet {
        let mut rules = RuleSet::new();
        for preset in &self.extends {
            rules.extend(preset.rules());
        }
        rules.extend(self.rules.clone());
        rules
    }
}
