// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and validation.
//!
//! Files are deserialized into a loose [`RawConfig`] first and then checked
//! rule by rule, so every structural problem is reported against the key it
//! belongs to.

use crate::error::{CklintError, ConfigError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::schema::{
    Applicability, CaseStyle, LintConfig, Preset, RuleConfig, RuleName, RuleSet, RuleValue,
    Severity, ValueKind,
};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cklint.toml", ".cklint.toml", ".config/cklint.toml"];

/// Shape of a configuration file before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    extends: Extends,

    #[serde(default = "default_ignores")]
    default_ignores: bool,

    #[serde(default)]
    rules: BTreeMap<String, toml::Value>,
}

/// `extends` accepts a single preset name or a list of names.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Extends {
    One(String),
    Many(Vec<String>),
}

impl Default for Extends {
    fn default() -> Self {
        Extends::Many(Vec::new())
    }
}

impl Extends {
    fn into_names(self) -> Vec<String> {
        match self {
            Extends::One(name) => vec![name],
            Extends::Many(names) => names,
        }
    }
}

fn default_ignores() -> bool {
    true
}

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    // Then the user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    // And finally the XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let cklint_config = config_dir.join("cklint").join("config.toml");
        if cklint_config.is_file() {
            return Some(cklint_config);
        }
    }

    None
}

/// Load the nearest configuration file, or the built-in configuration if none exists.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using built-in configuration");
            super::default::load()
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CklintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CklintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    let raw: RawConfig = toml::from_str(content).map_err(|e| {
        CklintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    let extends = raw
        .extends
        .into_names()
        .into_iter()
        .map(|name| {
            name.parse::<Preset>()
                .map_err(|name| ConfigError::UnknownPreset { name })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut rules = RuleSet::new();
    for (key, value) in &raw.rules {
        let (name, rule) = parse_rule(key, value)?;
        rules.insert(name, rule);
    }

    tracing::debug!(
        "Parsed configuration: {} presets, {} rules",
        extends.len(),
        rules.len()
    );

    Ok(LintConfig {
        extends,
        default_ignores: raw.default_ignores,
        rules,
    })
}

/// Validate one `[rules]` entry: `[severity, applicability, value?]`.
fn parse_rule(key: &str, value: &toml::Value) -> std::result::Result<(RuleName, RuleConfig), ConfigError> {
    let path = format!("rules.{}", key);
    let name = key
        .parse::<RuleName>()
        .map_err(|message| ConfigError::malformed(&path, message))?;

    let items = value.as_array().ok_or_else(|| {
        ConfigError::malformed(&path, "expected an array [severity, applicability, value]")
    })?;

    let (severity_item, rest) = items
        .split_first()
        .ok_or_else(|| ConfigError::malformed(&path, "rule array is empty"))?;
    if rest.len() > 2 {
        return Err(ConfigError::malformed(
            &path,
            format!("expected at most 3 items, found {}", items.len()),
        ));
    }

    let severity = parse_severity(severity_item).map_err(|m| ConfigError::malformed(&path, m))?;

    let applicability = match rest.first() {
        Some(item) => item
            .as_str()
            .ok_or_else(|| "applicability must be a string".to_string())
            .and_then(|s| s.parse::<Applicability>())
            .map_err(|m| ConfigError::malformed(&path, m))?,
        // A bare severity is only meaningful for switching a rule off.
        None if severity == Severity::Disabled => Applicability::Always,
        None => return Err(ConfigError::malformed(&path, "missing applicability")),
    };

    let value = if severity == Severity::Disabled && rest.len() < 2 {
        default_value(name.value_kind())
    } else {
        parse_value(name, rest.get(1)).map_err(|m| ConfigError::malformed(&path, m))?
    };

    Ok((name, RuleConfig::new(severity, applicability, value)))
}

fn parse_severity(item: &toml::Value) -> std::result::Result<Severity, String> {
    match item {
        toml::Value::Integer(level) => Severity::from_level(*level)
            .ok_or_else(|| format!("severity must be 0, 1 or 2, found {}", level)),
        toml::Value::String(s) => s.parse::<Severity>(),
        other => Err(format!(
            "severity must be an integer or a string, found {}",
            other.type_str()
        )),
    }
}

/// Value used when a rule is disabled without one.
fn default_value(kind: ValueKind) -> RuleValue {
    match kind {
        ValueKind::None => RuleValue::None,
        ValueKind::Types => RuleValue::Types(Vec::new()),
        ValueKind::Cases => RuleValue::Cases(Vec::new()),
        ValueKind::Length => RuleValue::Length(0),
        ValueKind::Text => RuleValue::Text(".".to_string()),
    }
}

fn parse_value(name: RuleName, item: Option<&toml::Value>) -> std::result::Result<RuleValue, String> {
    let kind = name.value_kind();
    let mismatch = || format!("expected {}", kind.describe());

    match (kind, item) {
        (ValueKind::None, None) => Ok(RuleValue::None),
        (ValueKind::None, Some(_)) => Err(format!("{} takes no value", name)),

        // The full stop character defaults to '.'.
        (ValueKind::Text, None) => Ok(RuleValue::Text(".".to_string())),
        (ValueKind::Text, Some(toml::Value::String(s))) => Ok(RuleValue::Text(s.clone())),

        (ValueKind::Length, Some(toml::Value::Integer(n))) => usize::try_from(*n)
            .map(RuleValue::Length)
            .map_err(|_| format!("length must not be negative, found {}", n)),

        (ValueKind::Types, Some(toml::Value::Array(items))) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(mismatch))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(RuleValue::Types),

        (ValueKind::Cases, Some(toml::Value::String(s))) => {
            Ok(RuleValue::Cases(vec![s.parse::<CaseStyle>()?]))
        }
        (ValueKind::Cases, Some(toml::Value::Array(items))) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(mismatch)
                    .and_then(|s| s.parse::<CaseStyle>())
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(RuleValue::Cases),

        (_, None) => Err(format!("missing value: {}", mismatch())),
        (_, Some(_)) => Err(mismatch()),
    }
}
