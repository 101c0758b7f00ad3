// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Case-style checks used by the `*-case` rules.

use crate::config::CaseStyle;

/// Check whether `input` is written in the given case style.
///
/// Empty input matches every style.
pub fn ensure_case(input: &str, style: CaseStyle) -> bool {
    if input.is_empty() {
        return true;
    }

    match style {
        CaseStyle::LowerCase => input == input.to_lowercase(),
        CaseStyle::UpperCase => input == input.to_uppercase(),
        CaseStyle::SentenceCase => input == upper_first(&input.to_lowercase()),
        CaseStyle::StartCase => input
            .split_whitespace()
            .all(|word| !word.chars().next().is_some_and(char::is_lowercase)),
        CaseStyle::PascalCase => {
            is_identifier(input) && input.chars().next().is_some_and(char::is_uppercase)
        }
        CaseStyle::CamelCase => {
            is_identifier(input) && !input.chars().next().is_some_and(char::is_uppercase)
        }
        CaseStyle::KebabCase => is_delimited_lower(input, '-'),
        CaseStyle::SnakeCase => is_delimited_lower(input, '_'),
    }
}

fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Letters and digits only, no separators.
fn is_identifier(input: &str) -> bool {
    input.chars().all(char::is_alphanumeric)
}

/// Lower-case alphanumeric words joined by single `delimiter`s.
fn is_delimited_lower(input: &str, delimiter: char) -> bool {
    input.split(delimiter).all(|word| {
        !word.is_empty()
            && word
                .chars()
                .all(|c| c.is_alphanumeric() && !c.is_uppercase())
    })
}
