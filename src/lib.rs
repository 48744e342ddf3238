//! no_verify_guard: blocks git hook bypasses in agent shell commands.
//!
//! Inspects a single shell command line (as submitted by a coding agent) and
//! decides whether it invokes a git subcommand in a way that skips commit or
//! push verification hooks, either via `--no-verify`/`-n` or via a
//! `-c core.hooksPath=` override. This is a policy gate, not a shell
//! interpreter: it recognizes the command well enough for a binary
//! allow/block decision despite quoting, chaining, wrappers, and comments.
//!
//! The core surface is four pure functions:
//!
//! - [`locate_git_subcommand`] - find the first live git invocation
//! - [`has_bypass_flag`] - check for `--no-verify` (or `-n` on commit)
//! - [`has_hooks_path_override`] - check for a `-c core.hooksPath=` override
//! - [`evaluate`] - the composed gate, one [`Decision`] per call
//!
//! All four are total over arbitrary input, allocate nothing shared, and are
//! safe to call concurrently.

#![forbid(unsafe_code)]

pub mod detectors;
pub mod evaluator;
pub mod exit_codes;
pub mod input;
pub mod locator;
pub mod registry;

pub use detectors::{has_bypass_flag, has_hooks_path_override};
pub use evaluator::{Decision, evaluate};
pub use input::{InputFormat, ParseResult, parse_input};
pub use locator::locate_git_subcommand;
pub use registry::{GitSubcommand, SENSITIVE_SUBCOMMANDS};
