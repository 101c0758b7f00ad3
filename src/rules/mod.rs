// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit linting.
//!
//! This module evaluates a configured rule set against commit messages
//! and collects the violations into a report.

mod builtin;
mod case;
mod engine;
mod ignore;
mod validator;

pub use builtin::check_rule;
pub use case::ensure_case;
pub use engine::RuleEngine;
pub use ignore::is_ignored;
pub use validator::{LintReport, OutputFormat, RuleViolation};
