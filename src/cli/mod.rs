// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command-line entry point support.
//!
//! cklint takes no arguments: the message comes from stdin and settings
//! come from `CKLINT_*` environment variables.

mod dispatch;
mod settings;

pub use dispatch::{lint_message, resolve_config, run};
pub use settings::{Settings, CONFIG_ENV, DEBUG_ENV, FORMAT_ENV};
