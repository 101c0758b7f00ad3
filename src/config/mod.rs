// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cklint.
//!
//! This module provides the built-in rule set, the presets it extends, and
//! the loader for `cklint.toml` files.

pub mod default;
mod loader;
mod schema;

pub use default::{conventional_rules, COMMIT_TYPES};
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
