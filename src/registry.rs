//! Registry of git subcommands that accept a verification-bypass mechanism.
//!
//! Pure data: the six subcommands that honor `--no-verify`, plus the closed
//! lookup of which of them treat `-n` as its short form.

use serde::Serialize;
use std::fmt;

/// A git subcommand that supports `--no-verify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GitSubcommand {
    Commit,
    Push,
    Merge,
    CherryPick,
    Rebase,
    Am,
}

/// The ordered, immutable set of sensitive subcommands.
///
/// Order defines the pattern table handed to the locator's token matcher;
/// the locator itself always accepts the first occurrence in the scanned
/// text, not the first entry here.
pub const SENSITIVE_SUBCOMMANDS: [GitSubcommand; 6] = [
    GitSubcommand::Commit,
    GitSubcommand::Push,
    GitSubcommand::Merge,
    GitSubcommand::CherryPick,
    GitSubcommand::Rebase,
    GitSubcommand::Am,
];

impl GitSubcommand {
    /// The literal token as it appears on a command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commit => "commit",
            Self::Push => "push",
            Self::Merge => "merge",
            Self::CherryPick => "cherry-pick",
            Self::Rebase => "rebase",
            Self::Am => "am",
        }
    }

    /// Whether `-n` means `--no-verify` for this subcommand.
    ///
    /// Only `commit` treats `-n` as the no-verify short form. For `push` it
    /// is `--dry-run` and for `merge`/`cherry-pick` it is `--no-commit`, so
    /// blocking `-n` uniformly would deny legitimate dry-run usage.
    #[must_use]
    pub const fn accepts_short_no_verify(self) -> bool {
        matches!(self, Self::Commit)
    }
}

impl fmt::Display for GitSubcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
