// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module for message parsing.

mod message;

pub use message::{CommitMessage, Section};
