//! Policy gate composing the locator and the bypass detectors.
//!
//! Shared entry point for hook mode and the CLI so both surfaces make
//! identical decisions. The gate is total: every input string, including
//! empty or binary garbage, yields a `Decision`.

use crate::detectors::{has_bypass_flag, has_hooks_path_override};
use crate::locator::scan_invocations;
use crate::registry::GitSubcommand;
use serde::Serialize;
use tracing::debug;

/// Outcome of evaluating one command line.
///
/// `reason` is present iff `blocked`; `git_command` is present iff a git
/// invocation was located, whatever the block/allow outcome. Serializes with
/// camelCase field names for hosts that want the decision as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(rename = "gitCommand", skip_serializing_if = "Option::is_none")]
    pub git_command: Option<GitSubcommand>,
}

impl Decision {
    const fn allow(git_command: Option<GitSubcommand>) -> Self {
        Self {
            blocked: false,
            reason: None,
            git_command,
        }
    }

    fn block(reason: String, git_command: GitSubcommand) -> Self {
        Self {
            blocked: true,
            reason: Some(reason),
            git_command: Some(git_command),
        }
    }
}

/// Evaluate a command line against the bypass policy.
///
/// Every located invocation is checked, not just the first, so a bypass in a
/// later pipeline stage (`git push origin | git commit -n`) still blocks.
/// The hooks-path override is command-wide and checked once.
#[must_use]
pub fn evaluate(text: &str) -> Decision {
    let invocations = scan_invocations(text);
    let Some(&first) = invocations.first() else {
        debug!("no sensitive git invocation located");
        return Decision::allow(None);
    };

    for &sub in &invocations {
        if has_bypass_flag(text, sub) {
            debug!(subcommand = %sub, "blocking: no-verify flag");
            return Decision::block(
                format!(
                    "BLOCKED: --no-verify flag is not allowed with git {sub}. \
                     Git hooks must not be bypassed."
                ),
                sub,
            );
        }
    }

    if has_hooks_path_override(text) {
        debug!(subcommand = %first, "blocking: core.hooksPath override");
        return Decision::block(
            format!(
                "BLOCKED: core.hooksPath override is not allowed with git {first}. \
                 Git hooks must not be bypassed."
            ),
            first,
        );
    }

    debug!(subcommand = %first, "allowing");
    Decision::allow(Some(first))
}
