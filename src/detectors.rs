//! Detectors for verification-bypass mechanisms.
//!
//! Both detectors scan the full command text: a flag anywhere on the line is
//! treated as belonging to the located invocation, which trades a small
//! false-positive surface for never missing a bypass hidden behind wrapper
//! syntax the locator tolerates.

use crate::registry::GitSubcommand;
use regex::Regex;
use std::sync::LazyLock;

/// The long flag, word-bounded so `--no-verifytest` stays inert.
static NO_VERIFY_FLAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--no-verify\b").expect("no-verify pattern should compile")
});

/// `-n` standalone or opening a combined short-option cluster (`-nm`).
/// Git's short-option combining keeps `-n` meaningful as a cluster prefix.
static SHORT_NO_VERIFY_FLAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)-n(?:$|\s|[A-Za-z])").expect("short-flag pattern should compile")
});

/// `-c core.hooksPath=` with optional quoting and whitespace slack. Anchoring
/// on the `-c` prefix keeps the bare key inside a commit message inert.
static HOOKS_PATH_OVERRIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"-c\s+["']?core\.hooksPath\s*="#).expect("hooksPath pattern should compile")
});

/// Whether the text carries a verification-bypass flag for `subcommand`.
///
/// `--no-verify` blocks for every registered subcommand. The `-n` short form
/// counts only where the registry says it means no-verify (`commit`); for
/// `push`/`merge`/`cherry-pick`/`rebase`/`am` it is dry-run or no-commit and
/// must not trigger.
#[must_use]
pub fn has_bypass_flag(text: &str, subcommand: GitSubcommand) -> bool {
    if NO_VERIFY_FLAG.is_match(text) {
        return true;
    }
    subcommand.accepts_short_no_verify() && SHORT_NO_VERIFY_FLAG.is_match(text)
}

/// Whether the text overrides `core.hooksPath` via `-c`.
///
/// Independent of the matched subcommand: redirecting the hooks directory
/// disables hooks for the whole invocation, empty value included.
#[must_use]
pub fn has_hooks_path_override(text: &str) -> bool {
    HOOKS_PATH_OVERRIDE.is_match(text)
}
