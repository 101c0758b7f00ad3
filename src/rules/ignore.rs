// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Messages skipped by default: merges, reverts and autosquash commits.

use lazy_static::lazy_static;
use regex::RegexSet;

lazy_static! {
    static ref DEFAULT_IGNORES: RegexSet = RegexSet::new([
        r"^Merge pull request\b",
        r"^Merge branch\b",
        r"^Merge tag\b",
        r"^Merge remote-tracking branch\b",
        r"^Merged? .+? (?:in|into) .+$",
        r"^Merged PR .+: .+$",
        r"^[Rr]evert \S",
        r"^(?:amend|fixup|squash)! ",
        r"^Automatic merge\b",
        r"^Auto-merged .+? into .+$",
    ])
    .unwrap();
}

/// Whether a message header matches one of the default ignore patterns.
pub fn is_ignored(header: &str) -> bool {
    DEFAULT_IGNORES.is_match(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_commits_are_ignored() {
        assert!(is_ignored("Merge pull request #12 from octo/feature"));
        assert!(is_ignored("Merge branch 'main' into feature/login"));
        assert!(is_ignored("Merge tag 'v1.2.0'"));
        assert!(is_ignored("Merge remote-tracking branch 'origin/main'"));
        assert!(is_ignored("Merge feature into develop"));
        assert!(is_ignored("Automatic merge from CI"));
        assert!(is_ignored("Auto-merged main into release"));
    }

    #[test]
    fn test_reverts_and_autosquash_are_ignored() {
        assert!(is_ignored("Revert \"feat: add login\""));
        assert!(is_ignored("fixup! feat: add login"));
        assert!(is_ignored("squash! fix: typo"));
    }

    #[test]
    fn test_conventional_commits_are_not_ignored() {
        assert!(!is_ignored("feat: add login"));
        assert!(!is_ignored("revert: undo login change"));
        assert!(!is_ignored("Feat: Add Login."));
        assert!(!is_ignored("chore:"));
    }
}
