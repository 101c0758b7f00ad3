// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rules.
//!
//! Each check computes the rule's condition and compares it with the
//! configured applicability: `always` requires the condition, `never`
//! forbids it.

use crate::commit::{CommitMessage, Section};
use crate::config::{Applicability, CaseStyle, RuleConfig, RuleName, RuleValue};

use super::case::ensure_case;
use super::validator::RuleViolation;

/// Evaluate one rule against a message.
///
/// Returns `None` when the rule passes, is disabled, or is configured with a
/// value of the wrong kind.
pub fn check_rule(name: RuleName, rule: &RuleConfig, message: &CommitMessage) -> Option<RuleViolation> {
    if !rule.is_enabled() {
        return None;
    }

    if rule.value.kind() != name.value_kind() {
        tracing::warn!(
            "Skipping rule {}: expected {}",
            name,
            name.value_kind().describe()
        );
        return None;
    }

    let check = Check { name, rule };
    match name {
        RuleName::TypeEnum => check_type_enum(check, message),
        RuleName::TypeCase => check_case(check, "type", message.commit_type.as_deref()),
        RuleName::TypeEmpty => check_empty(check, "type", message.commit_type.as_deref()),
        RuleName::SubjectCase => check_case(check, "subject", message.subject.as_deref()),
        RuleName::SubjectEmpty => check_empty(check, "subject", message.subject.as_deref()),
        RuleName::SubjectFullStop => check_subject_full_stop(check, message),
        RuleName::HeaderMaxLength => check_header_max_length(check, message),
        RuleName::HeaderTrim => check_header_trim(check, message),
        RuleName::BodyLeadingBlank => check_leading_blank(check, "body", message.body.as_ref()),
        RuleName::BodyMaxLineLength => {
            check_max_line_length(check, "body", message.body.as_ref())
        }
        RuleName::FooterLeadingBlank => {
            check_leading_blank(check, "footer", message.footer.as_ref())
        }
        RuleName::FooterMaxLineLength => {
            check_max_line_length(check, "footer", message.footer.as_ref())
        }
    }
}

/// A rule being evaluated.
#[derive(Clone, Copy)]
struct Check<'a> {
    name: RuleName,
    rule: &'a RuleConfig,
}

impl Check<'_> {
    fn negated(&self) -> bool {
        self.rule.applicability == Applicability::Never
    }

    /// "must" or "must not", depending on applicability.
    fn must(&self) -> &'static str {
        if self.negated() {
            "must not"
        } else {
            "must"
        }
    }

    /// Turn a condition into a violation if it does not meet the applicability.
    fn verdict(
        &self,
        condition: bool,
        message: String,
        suggestion: Option<String>,
        line: Option<usize>,
    ) -> Option<RuleViolation> {
        if condition != self.negated() {
            return None;
        }

        Some(RuleViolation {
            rule: self.name,
            severity: self.rule.severity,
            message,
            suggestion,
            line,
        })
    }
}

fn check_type_enum(check: Check<'_>, message: &CommitMessage) -> Option<RuleViolation> {
    let RuleValue::Types(ref types) = check.rule.value else {
        return None;
    };
    // Missing types are reported by type-empty.
    let commit_type = message.commit_type.as_deref().filter(|t| !t.is_empty())?;

    let list = types.join(", ");
    check.verdict(
        types.iter().any(|t| t == commit_type),
        format!("type {} be one of [{}]", check.must(), list),
        Some(format!("Found '{}'", commit_type)),
        Some(1),
    )
}

fn check_case(check: Check<'_>, target: &str, value: Option<&str>) -> Option<RuleViolation> {
    let RuleValue::Cases(ref cases) = check.rule.value else {
        return None;
    };
    let value = value.filter(|v| !v.is_empty())?;

    let matched = cases.iter().any(|&case| ensure_case(value, case));
    let expected = cases
        .iter()
        .map(CaseStyle::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    check.verdict(
        matched,
        format!("{} {} be {}", target, check.must(), expected),
        None,
        Some(1),
    )
}

fn check_empty(check: Check<'_>, target: &str, value: Option<&str>) -> Option<RuleViolation> {
    let is_empty = value.map_or(true, str::is_empty);
    let (message, suggestion) = if check.negated() {
        (
            format!("{} may not be empty", target),
            Some("Use the form 'type(scope): subject'".to_string()),
        )
    } else {
        (format!("{} must be empty", target), None)
    };

    check.verdict(is_empty, message, suggestion, Some(1))
}

fn check_subject_full_stop(check: Check<'_>, message: &CommitMessage) -> Option<RuleViolation> {
    let RuleValue::Text(ref stop) = check.rule.value else {
        return None;
    };
    let subject = message.subject.as_deref().filter(|s| !s.is_empty())?;

    let (text, suggestion) = if check.negated() {
        (
            "subject may not end with full stop".to_string(),
            Some(format!("Remove the trailing '{}'", stop)),
        )
    } else {
        (
            "subject must end with full stop".to_string(),
            Some(format!("End the subject with '{}'", stop)),
        )
    };

    check.verdict(subject.ends_with(stop.as_str()), text, suggestion, Some(1))
}

fn check_header_max_length(check: Check<'_>, message: &CommitMessage) -> Option<RuleViolation> {
    let RuleValue::Length(max) = check.rule.value else {
        return None;
    };
    let len = message.header_len();

    check.verdict(
        len <= max,
        format!(
            "header {} be longer than {} characters, current length is {}",
            if check.negated() { "must" } else { "must not" },
            max,
            len
        ),
        Some(format!("Shorten the header to {} characters or less", max)),
        Some(1),
    )
}

fn check_header_trim(check: Check<'_>, message: &CommitMessage) -> Option<RuleViolation> {
    let header = message.header.as_str();

    check.verdict(
        header == header.trim(),
        format!(
            "header {} have leading or trailing whitespace",
            if check.negated() { "must" } else { "must not" }
        ),
        None,
        Some(1),
    )
}

fn check_leading_blank(
    check: Check<'_>,
    target: &str,
    section: Option<&Section>,
) -> Option<RuleViolation> {
    let section = section?;

    check.verdict(
        section.leading_blank,
        format!("{} {} have leading blank line", target, check.must()),
        None,
        Some(section.line),
    )
}

fn check_max_line_length(
    check: Check<'_>,
    target: &str,
    section: Option<&Section>,
) -> Option<RuleViolation> {
    let RuleValue::Length(max) = check.rule.value else {
        return None;
    };
    let section = section?;

    let longest = section
        .numbered_lines()
        .map(|(line, text)| (line, text.chars().count()))
        .find(|&(_, len)| len > max);

    check.verdict(
        longest.is_none(),
        format!(
            "{}'s lines {} be longer than {} characters",
            target,
            if check.negated() { "must" } else { "must not" },
            max
        ),
        longest.map(|(line, len)| format!("Line {} has {} characters", line, len)),
        longest.map(|(line, _)| line).or(Some(section.line)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Severity, COMMIT_TYPES};
    use proptest::prelude::*;

    fn parse(message: &str) -> CommitMessage {
        CommitMessage::parse(message).unwrap()
    }

    fn types() -> RuleConfig {
        RuleConfig::error(
            Applicability::Always,
            RuleValue::Types(COMMIT_TYPES.iter().map(|t| t.to_string()).collect()),
        )
    }

    fn lower() -> RuleConfig {
        RuleConfig::error(
            Applicability::Always,
            RuleValue::Cases(vec![CaseStyle::LowerCase]),
        )
    }

    fn never() -> RuleConfig {
        RuleConfig::error(Applicability::Never, RuleValue::None)
    }

    fn full_stop() -> RuleConfig {
        RuleConfig::error(Applicability::Never, RuleValue::Text(".".to_string()))
    }

    fn max(n: usize) -> RuleConfig {
        RuleConfig::error(Applicability::Always, RuleValue::Length(n))
    }

    #[test]
    fn test_type_enum() {
        assert!(check_rule(RuleName::TypeEnum, &types(), &parse("feat: add login")).is_none());

        let issue = check_rule(RuleName::TypeEnum, &types(), &parse("Feat: add login")).unwrap();
        assert!(issue.is_error());
        assert!(issue.message.starts_with("type must be one of [feat, fix"));

        assert!(check_rule(RuleName::TypeEnum, &types(), &parse("wip: stuff")).is_some());
    }

    #[test]
    fn test_type_enum_skips_missing_type() {
        assert!(check_rule(RuleName::TypeEnum, &types(), &parse("Update readme")).is_none());
    }

    #[test]
    fn test_type_enum_never() {
        let rule = RuleConfig::error(
            Applicability::Never,
            RuleValue::Types(vec!["wip".to_string()]),
        );
        let issue = check_rule(RuleName::TypeEnum, &rule, &parse("wip: stuff")).unwrap();
        assert!(issue.message.starts_with("type must not be one of [wip]"));
        assert!(check_rule(RuleName::TypeEnum, &rule, &parse("feat: stuff")).is_none());
    }

    #[test]
    fn test_subject_case_never_list() {
        let rule = RuleConfig::error(
            Applicability::Never,
            RuleValue::Cases(vec![CaseStyle::SentenceCase, CaseStyle::UpperCase]),
        );
        assert!(check_rule(RuleName::SubjectCase, &rule, &parse("fix: Add login")).is_some());
        assert!(check_rule(RuleName::SubjectCase, &rule, &parse("fix: ADD LOGIN")).is_some());
        assert!(check_rule(RuleName::SubjectCase, &rule, &parse("fix: add Login")).is_none());
    }

    #[test]
    fn test_subject_empty() {
        let issue = check_rule(RuleName::SubjectEmpty, &never(), &parse("chore:")).unwrap();
        assert_eq!(issue.message, "subject may not be empty");
        assert!(check_rule(RuleName::SubjectEmpty, &never(), &parse("Update readme")).is_some());
        assert!(check_rule(RuleName::SubjectEmpty, &never(), &parse("chore: bump")).is_none());
    }

    #[test]
    fn test_type_empty() {
        assert!(check_rule(RuleName::TypeEmpty, &never(), &parse("Update readme")).is_some());
        assert!(check_rule(RuleName::TypeEmpty, &never(), &parse("(core): update")).is_some());
        assert!(check_rule(RuleName::TypeEmpty, &never(), &parse("chore: bump")).is_none());
    }

    #[test]
    fn test_subject_full_stop() {
        let issue =
            check_rule(RuleName::SubjectFullStop, &full_stop(), &parse("fix: typo.")).unwrap();
        assert_eq!(issue.message, "subject may not end with full stop");
        assert!(check_rule(RuleName::SubjectFullStop, &full_stop(), &parse("fix: typo")).is_none());
        assert!(check_rule(RuleName::SubjectFullStop, &full_stop(), &parse("chore:")).is_none());
    }

    #[test]
    fn test_header_max_length() {
        let header = format!("feat: {}", "a".repeat(95));
        assert_eq!(header.len(), 101);
        let issue = check_rule(RuleName::HeaderMaxLength, &max(100), &parse(&header)).unwrap();
        assert!(issue.message.contains("current length is 101"));

        let header = format!("feat: {}", "a".repeat(94));
        assert!(check_rule(RuleName::HeaderMaxLength, &max(100), &parse(&header)).is_none());
    }

    #[test]
    fn test_header_trim() {
        let rule = RuleConfig::error(Applicability::Always, RuleValue::None);
        assert!(check_rule(RuleName::HeaderTrim, &rule, &parse("feat: add login ")).is_some());
        assert!(check_rule(RuleName::HeaderTrim, &rule, &parse("feat: add login")).is_none());
    }

    #[test]
    fn test_body_max_line_length_reports_line() {
        let message = format!("fix: wrap\n\nshort line\n{}", "b".repeat(101));
        let issue =
            check_rule(RuleName::BodyMaxLineLength, &max(100), &parse(&message)).unwrap();
        assert_eq!(issue.line, Some(4));
        assert_eq!(issue.message, "body's lines must not be longer than 100 characters");
    }

    #[test]
    fn test_footer_max_line_length() {
        let message = format!("fix: wrap\n\nRefs: {}", "1".repeat(100));
        assert!(check_rule(RuleName::FooterMaxLineLength, &max(100), &parse(&message)).is_some());
        assert!(check_rule(RuleName::BodyMaxLineLength, &max(100), &parse(&message)).is_none());
    }

    #[test]
    fn test_leading_blank() {
        let rule = RuleConfig::warning(Applicability::Always, RuleValue::None);
        let issue =
            check_rule(RuleName::BodyLeadingBlank, &rule, &parse("fix: x\nbody text")).unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.line, Some(2));

        assert!(check_rule(RuleName::BodyLeadingBlank, &rule, &parse("fix: x\n\nbody")).is_none());
        assert!(check_rule(RuleName::BodyLeadingBlank, &rule, &parse("fix: x")).is_none());
        assert!(
            check_rule(RuleName::FooterLeadingBlank, &rule, &parse("fix: x\nRefs: #1")).is_some()
        );
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let rule = RuleConfig::new(Severity::Disabled, Applicability::Never, RuleValue::None);
        assert!(check_rule(RuleName::SubjectEmpty, &rule, &parse("chore:")).is_none());
    }

    #[test]
    fn test_wrong_value_kind_is_skipped() {
        let rule = RuleConfig::error(Applicability::Always, RuleValue::Length(10));
        assert!(check_rule(RuleName::TypeEnum, &rule, &parse("wip: stuff")).is_none());
    }

    proptest! {
        #[test]
        fn type_enum_passes_iff_listed(t in "[A-Za-z]{1,10}") {
            let message = parse(&format!("{}: add login", t));
            let listed = COMMIT_TYPES.contains(&t.as_str());
            prop_assert_eq!(check_rule(RuleName::TypeEnum, &types(), &message).is_none(), listed);
        }

        #[test]
        fn subject_case_passes_iff_lowercase(s in "[A-Za-z][A-Za-z .]{0,40}") {
            let message = parse(&format!("feat: {}", s));
            let subject = message.subject_str().to_string();
            prop_assert_eq!(
                check_rule(RuleName::SubjectCase, &lower(), &message).is_none(),
                subject.to_lowercase() == subject
            );
        }

        #[test]
        fn subject_empty_passes_iff_subject_present(s in "([a-z][a-z ]{0,40})?") {
            let message = parse(&format!("feat: {}", s));
            prop_assert_eq!(
                check_rule(RuleName::SubjectEmpty, &never(), &message).is_none(),
                !s.is_empty()
            );
        }

        #[test]
        fn subject_full_stop_passes_iff_no_trailing_period(s in "[a-z][a-z .]{0,40}") {
            let message = parse(&format!("feat: {}", s));
            prop_assert_eq!(
                check_rule(RuleName::SubjectFullStop, &full_stop(), &message).is_none(),
                !s.ends_with('.')
            );
        }

        #[test]
        fn header_max_length_passes_iff_within_limit(n in 0usize..200) {
            let header = format!("feat: {}", "a".repeat(n));
            let message = parse(&header);
            prop_assert_eq!(
                check_rule(RuleName::HeaderMaxLength, &max(100), &message).is_none(),
                header.chars().count() <= 100
            );
        }

        #[test]
        fn body_line_length_passes_iff_within_limit(n in 1usize..200) {
            let message = parse(&format!("fix: wrap\n\n{}", "x".repeat(n)));
            prop_assert_eq!(
                check_rule(RuleName::BodyMaxLineLength, &max(100), &message).is_none(),
                n <= 100
            );
        }
    }
}
