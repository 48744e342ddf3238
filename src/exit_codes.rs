//! Process exit codes for the `nvg` binary.
//!
//! Agent hosts (Claude Code, Cursor, Gemini CLI) interpret exit 2 from a
//! pre-tool hook as "block and surface stderr to the agent", exit 0 as
//! "proceed".

use crate::evaluator::Decision;

/// Command is allowed to proceed.
pub const ALLOWED: u8 = 0;
/// An error occurred reading or parsing input.
pub const ERROR: u8 = 1;
/// Command is blocked.
pub const BLOCKED: u8 = 2;

/// Map a gate decision to the process exit code.
#[must_use]
pub const fn for_decision(decision: &Decision) -> u8 {
    if decision.blocked { BLOCKED } else { ALLOWED }
}
