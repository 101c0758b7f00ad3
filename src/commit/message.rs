// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::error::{CklintError, CommitError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Header of a conventional commit: `type(scope)!: subject`.
    ///
    /// A bare trailing colon (`chore:`) yields a type with an empty subject;
    /// otherwise the colon must be followed by a space.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>\w*)(?:\([^()\r\n]*\))?!?(?::$|: (?P<subject>.*)$)"
    ).unwrap();

    /// A git trailer or conventional footer token: `Token: value` or `Token #value`.
    static ref TRAILER_REGEX: Regex = Regex::new(
        r"^(?:BREAKING[ -]CHANGE|[A-Za-z][\w-]*)(?:: | #)\S"
    ).unwrap();
}

/// A contiguous block of lines (body or footer) of a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Text of the section, lines joined with `\n`.
    pub text: String,
    /// 1-based line number of the first line in the message.
    pub line: usize,
    /// Whether the section is separated from what precedes it by a blank line.
    pub leading_blank: bool,
}

impl Section {
    /// Iterate the section's lines together with their 1-based line numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text
            .lines()
            .enumerate()
            .map(move |(offset, line)| (self.line + offset, line))
    }
}

/// A commit message split into its conventional parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// The message with git comment lines removed.
    pub raw: String,
    /// First line of the message, untrimmed.
    pub header: String,
    /// Commit type, if the header has one.
    pub commit_type: Option<String>,
    /// Subject, if the header parsed. May be empty (`chore:`).
    pub subject: Option<String>,
    /// Optional body.
    pub body: Option<Section>,
    /// Optional footer (trailers, references, breaking-change notes).
    pub footer: Option<Section>,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Result<Self> {
        let lines = clean_lines(message);

        let Some(header) = lines.first() else {
            return Err(CklintError::Commit(CommitError::EmptyMessage));
        };
        let header = header.to_string();

        let (commit_type, subject) = match HEADER_REGEX.captures(&header) {
            Some(captures) => (
                captures
                    .name("type")
                    .map(|m| m.as_str().to_string())
                    .filter(|t| !t.is_empty()),
                Some(
                    captures
                        .name("subject")
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default(),
                ),
            ),
            None => (None, None),
        };

        let footer_start = find_footer_start(&lines);
        let body = section(&lines, 1, footer_start);
        let footer = section(&lines, footer_start, lines.len());

        Ok(Self {
            raw: lines.join("\n"),
            header,
            commit_type,
            subject,
            body,
            footer,
        })
    }

    /// Get the header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }

    /// The commit type, or an empty string if there is none.
    pub fn type_str(&self) -> &str {
        self.commit_type.as_deref().unwrap_or("")
    }

    /// The subject, or an empty string if there is none.
    pub fn subject_str(&self) -> &str {
        self.subject.as_deref().unwrap_or("")
    }
}

/// Drop git comment lines and surrounding blank lines.
fn clean_lines(message: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = message
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect();

    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.trim().is_empty()).count();
    lines.drain(..leading);

    lines
}

/// Index of the first footer line, or `lines.len()` if there is no footer.
///
/// The footer starts at a breaking-change note, or at the first trailer
/// followed only by trailers, blank lines and indented continuations.
fn find_footer_start(lines: &[&str]) -> usize {
    (1..lines.len())
        .find(|&i| {
            let line = lines[i];
            if line.starts_with("BREAKING CHANGE: ") || line.starts_with("BREAKING-CHANGE: ") {
                return true;
            }
            TRAILER_REGEX.is_match(line)
                && lines[i + 1..].iter().all(|l| {
                    l.trim().is_empty()
                        || TRAILER_REGEX.is_match(l)
                        || l.starts_with(char::is_whitespace)
                })
        })
        .unwrap_or(lines.len())
}

/// Build a section from `lines[start..end]`, trimming blank lines at both ends.
fn section(lines: &[&str], start: usize, end: usize) -> Option<Section> {
    if start >= end {
        return None;
    }

    let block = &lines[start..end];
    let first = block.iter().position(|l| !l.trim().is_empty())?;
    let last = block.iter().rposition(|l| !l.trim().is_empty())?;

    let index = start + first;
    Some(Section {
        text: block[first..=last].join("\n"),
        line: index + 1,
        leading_blank: lines[index - 1].trim().is_empty(),
    })
}
