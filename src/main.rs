//! `nvg`: a pre-tool hook that blocks git hook bypasses before they execute.
//!
//! Exit behavior:
//!   - Exit 0, no output = allow
//!   - Exit 2, reason on stderr = block
//!   - Exit 1, error on stderr = input error

#![forbid(unsafe_code)]

use clap::Parser;
use colored::Colorize;
use no_verify_guard::input::{self, InputFormat};
use no_verify_guard::{evaluator, exit_codes};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = "\
INPUT METHODS:
  1. Command argument:
     nvg \"git commit --no-verify -m 'test'\"

  2. Stdin (plain text):
     echo \"git commit --no-verify\" | nvg

  3. Stdin (JSON - auto-detected):
     echo '{\"command\":\"git commit --no-verify\"}' | nvg

  4. Stdin (Claude Code format):
     echo '{\"tool_input\":{\"command\":\"git commit\"}}' | nvg --format claude-code

SUPPORTED JSON FIELDS:
  - tool_input.command  (Claude Code format)
  - command, cmd, input, shell, script

EXIT CODES:
  0 - Command is allowed
  2 - Command is blocked (bypasses git hooks)
  1 - An error occurred

EXAMPLES:
  # Claude Code hook (.claude/settings.json)
  {
    \"hooks\": {
      \"PreToolUse\": [{
        \"matcher\": \"Bash\",
        \"hooks\": [{ \"type\": \"command\", \"command\": \"nvg\" }]
      }]
    }
  }

  # Cursor hook (.cursor/hooks.json)
  {
    \"hooks\": {
      \"beforeShellExecution\": [{ \"command\": \"nvg\" }]
    }
  }";

/// Block --no-verify flags and core.hooksPath overrides in git commands.
#[derive(Parser)]
#[command(name = "nvg", version, after_long_help = AFTER_HELP)]
struct Cli {
    /// Input format
    #[arg(long, value_enum, default_value_t = InputFormat::Auto, env = "NVG_FORMAT")]
    format: InputFormat,

    /// Command text to check; read from stdin when omitted
    command: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NVG_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Disable colored stderr when redirected or explicitly opted out.
fn configure_colors() {
    if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("NVG_NO_COLOR").is_some() {
        colored::control::set_override(false);
        return;
    }

    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}

fn main() -> ExitCode {
    init_tracing();
    configure_colors();

    // clap exits 2 on usage errors by default, which would collide with the
    // BLOCKED exit code agents key on. Map usage errors to ERROR instead.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let is_usage_error = err.use_stderr();
            let _ = err.print();
            return ExitCode::from(if is_usage_error {
                exit_codes::ERROR
            } else {
                // --help and --version land here
                exit_codes::ALLOWED
            });
        }
    };

    let raw = match cli.command {
        Some(command) => command,
        None => match input::read_stdin(input::MAX_INPUT_BYTES) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::from(exit_codes::ERROR);
            }
        },
    };

    if raw.trim().is_empty() {
        return ExitCode::from(exit_codes::ALLOWED);
    }

    let parsed = input::parse_input(&raw, cli.format);
    let decision = evaluator::evaluate(&parsed.command);

    if let Some(reason) = &decision.reason {
        eprintln!("{}", reason.red().bold());
    }

    ExitCode::from(exit_codes::for_decision(&decision))
}
