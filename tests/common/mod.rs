//! Shared command corpus for integration tests.
//!
//! Each entry pairs a command line with a short description used in
//! assertion messages.

pub type TestCommand = (&'static str, &'static str);

/// Commands that must be allowed (no bypass mechanism present).
pub const ALLOWED_COMMANDS: &[TestCommand] = &[
    // Normal git commands
    (r#"git commit -m "test""#, "normal commit"),
    (r#"git commit -m "feat: add feature""#, "commit with conventional message"),
    ("git push origin main", "normal push"),
    ("git push -u origin feature", "push with upstream"),
    ("git merge feature", "normal merge"),
    ("git cherry-pick abc123", "normal cherry-pick"),
    ("git rebase main", "normal rebase"),
    ("git am < patch", "normal am"),
    // Git commands that don't support --no-verify
    ("git status", "git status"),
    ("git log --oneline", "git log"),
    ("git diff", "git diff"),
    ("git branch -a", "git branch"),
    ("git checkout main", "git checkout"),
    ("git pull origin main", "git pull"),
    ("git fetch --all", "git fetch"),
    ("git stash", "git stash"),
    // Non-git commands
    ("npm install", "npm install"),
    ("pnpm build", "pnpm build"),
    ("yarn test", "yarn test"),
    ("ls -la", "ls command"),
    (r#"echo "hello""#, "echo command"),
    // -n flag in non-commit contexts (different meaning)
    ("git push -n origin main", "push -n (dry-run)"),
    ("git merge -n feature", "merge -n (no commit)"),
    ("git cherry-pick -n abc123", "cherry-pick -n (no commit)"),
    // Commands with special characters
    (r#"git commit -m "feat(scope): add feature #123""#, "special chars"),
    (r#"git commit -m "fix: handle edge case @user""#, "@ mention"),
];

/// Commands that must be blocked (bypass flag or hooks-path override).
pub const BLOCKED_COMMANDS: &[TestCommand] = &[
    // --no-verify flag
    (r#"git commit --no-verify -m "test""#, "commit with --no-verify"),
    (r#"git commit -m "test" --no-verify"#, "commit with --no-verify at end"),
    ("git push --no-verify origin main", "push with --no-verify"),
    ("git push origin main --no-verify", "push with --no-verify at end"),
    ("git merge --no-verify feature", "merge with --no-verify"),
    ("git cherry-pick --no-verify abc123", "cherry-pick with --no-verify"),
    ("git rebase --no-verify main", "rebase with --no-verify"),
    ("git am --no-verify < patch", "am with --no-verify"),
    // -n shorthand (only for commit)
    (r#"git commit -n -m "test""#, "commit with -n flag"),
    (r#"git commit -m "test" -n"#, "commit with -n at end"),
    (r#"git commit -nm "test""#, "commit with combined -nm flags"),
    // Edge cases
    (r#"ls && git commit --no-verify -m "test""#, "chained with --no-verify"),
    (r#"git -C /path commit --no-verify -m "test""#, "-C flag with --no-verify"),
    (r#"git    commit    --no-verify -m "test""#, "extra whitespace"),
    // core.hooksPath override (bypass hooks by redirecting hooks directory)
    ("git -c core.hooksPath=/dev/null push", "hooksPath=/dev/null push"),
    (r#"git -c core.hooksPath=/dev/null commit -m "test""#, "hooksPath commit"),
    ("git -c core.hooksPath= push origin main", "empty hooksPath push"),
    (r#"git -c "core.hooksPath=/dev/null" push"#, "quoted hooksPath push"),
];
