//! Shell-aware locator for git invocations.
//!
//! Scans raw command text for a `git` token that plausibly sits in command
//! position, then scans forward for a sensitive subcommand. This is heuristic
//! string analysis, not a shell parser: each acceptance rule is a small
//! predicate so its edge cases (comments, quoting, chaining) can be tested in
//! isolation.
//!
//! A rejected candidate never aborts the scan; the cursor moves on to the
//! next `git` occurrence, so `git status | git commit` resolves against the
//! second invocation.

use crate::registry::{GitSubcommand, SENSITIVE_SUBCOMMANDS};
use aho_corasick::{AhoCorasick, MatchKind};
use memchr::{memchr, memchr2, memmem};
use smallvec::SmallVec;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::trace;

const GIT_TOKEN: &[u8] = b"git";

/// Multi-pattern matcher over the registry tokens. Leftmost-longest so the
/// first subcommand occurrence in the text wins, not the first registry entry.
static SUBCOMMAND_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(SENSITIVE_SUBCOMMANDS.map(GitSubcommand::as_str))
        .expect("subcommand tokens should compile")
});

/// Locate the first live git invocation and its sensitive subcommand.
///
/// Returns `None` when no accepted (marker, subcommand) pair exists anywhere
/// in the text.
#[must_use]
pub fn locate_git_subcommand(text: &str) -> Option<GitSubcommand> {
    scan_invocations(text).first().copied()
}

/// Collect every accepted (marker, subcommand) pair in left-to-right order.
///
/// The policy gate checks all of them, so a bypass attached to a later
/// pipeline stage is not masked by an earlier clean invocation.
pub(crate) fn scan_invocations(text: &str) -> SmallVec<[GitSubcommand; 2]> {
    let mut found = SmallVec::new();
    let comments = comment_spans(text);

    for start in memmem::find_iter(text.as_bytes(), GIT_TOKEN) {
        if comments.iter().any(|span| span.contains(&start)) {
            trace!(offset = start, "git token inside comment, skipping");
            continue;
        }
        if !in_command_position(text, start) {
            trace!(offset = start, "git token not in command position");
            continue;
        }
        let Some(end) = marker_end(text, start) else {
            trace!(offset = start, "git token not word-bounded on the right");
            continue;
        };
        if let Some(sub) = subcommand_after(text, end) {
            found.push(sub);
        }
    }

    found
}

/// Characters that may legitimately precede `git` in command position:
/// chaining (`;`, `&`, `|`), substitution (`$`, backtick, `(`, `<`),
/// grouping (`{`), negation (`!`), quoting, and path prefixes
/// (`/usr/bin/git`, `./git`, `~/bin/git`, Windows `\`).
fn is_marker_prefix(c: char) -> bool {
    c.is_whitespace()
        || is_quote(c)
        || matches!(
            c,
            ';' | '&' | '|' | '$' | '`' | '(' | '<' | '{' | '!' | '/' | '.' | '~' | '\\'
        )
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

/// Characters allowed directly after a subcommand token: trailing redirects,
/// chains, comments, and closing shell grouping, but never a word character
/// (`commit` must not match inside `committed`).
fn is_token_suffix(c: char) -> bool {
    c.is_whitespace() || is_quote(c) || matches!(c, ';' | '&' | '#' | '|' | '>' | ')' | ']' | '}')
}

/// True when the candidate at `start` is at the start of input or preceded
/// by a command-position character.
fn in_command_position(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().is_none_or(is_marker_prefix)
}

/// Right-boundary check for a `git` candidate, tolerating a Windows-style
/// `.exe` suffix. Returns the end offset of the accepted marker.
fn marker_end(text: &str, start: usize) -> Option<usize> {
    let mut end = start + GIT_TOKEN.len();
    if text[end..].starts_with(".exe") {
        end += ".exe".len();
    }
    match text[end..].chars().next() {
        None => Some(end),
        Some(c) if c.is_whitespace() || is_quote(c) => Some(end),
        Some(_) => None,
    }
}

/// Scan forward from an accepted marker for the first registry token.
///
/// The search never crosses `;` or `|`: a subcommand past either separator
/// belongs to a different pipeline stage, and the caller must re-seek a
/// later marker instead of borrowing wrong context.
fn subcommand_after(text: &str, from: usize) -> Option<GitSubcommand> {
    let stop = memchr2(b';', b'|', &text.as_bytes()[from..]).map_or(text.len(), |off| from + off);
    let region = &text[from..stop];

    for m in SUBCOMMAND_MATCHER.find_iter(region) {
        let tok_start = from + m.start();
        let tok_end = from + m.end();

        let left_bounded = text[..tok_start]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        if !left_bounded {
            continue;
        }
        let right_bounded = text[tok_end..].chars().next().is_none_or(is_token_suffix);
        if !right_bounded {
            continue;
        }

        return Some(SENSITIVE_SUBCOMMANDS[m.pattern().as_usize()]);
    }
    None
}

/// Byte spans covered by line comments: an unescaped `#` up to the next
/// newline. A `#` preceded by `\` (escaped) or `$` (the `$#` variable) does
/// not open a comment. Quoted `#` is not treated specially.
fn comment_spans(text: &str) -> SmallVec<[Range<usize>; 2]> {
    let bytes = text.as_bytes();
    let mut spans = SmallVec::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let Some(off) = memchr(b'#', &bytes[cursor..]) else {
            break;
        };
        let at = cursor + off;
        if at > 0 && matches!(bytes[at - 1], b'\\' | b'$') {
            cursor = at + 1;
            continue;
        }
        let end = memchr(b'\n', &bytes[at..]).map_or(bytes.len(), |off| at + off);
        spans.push(at..end);
        cursor = end.saturating_add(1);
    }

    spans
}
