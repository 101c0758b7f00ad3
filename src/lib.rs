// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cklint - Conventional commit message linter
//!
//! A typed rule set for conventional commit messages and the engine that
//! evaluates it.
//!
//! # Features
//!
//! - **Built-in rule set**: the project rules, layered on the conventional preset
//! - **Typed configuration**: rule names and parameters are checked at load time
//! - **Rule engine**: every violation for a message collected into one report
//! - **Config discovery**: `cklint.toml` in the repository, home or XDG directories
//!
//! # Example
//!
//! ```
//! use cklint::config::LintConfig;
//! use cklint::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(LintConfig::load().unwrap());
//!
//! assert!(engine.lint("feat: add login").unwrap().is_valid());
//!
//! let report = engine.lint("Feat: Add Login.").unwrap();
//! assert_eq!(report.errors.len(), 4);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{CklintError, Result};
pub use rules::{LintReport, RuleEngine};
