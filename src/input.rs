//! Host-side input plumbing: stdin reading and calling-convention envelopes.
//!
//! Different agent integrations hand the command over differently: Claude
//! Code sends `{"tool_input":{"command":"..."}}`, Cursor and Gemini CLI send
//! `{"command":"..."}`, and plain text arrives from shell pipes. The scanner
//! core only ever sees the flattened command string extracted here.

use clap::ValueEnum;
use std::fmt;
use std::io::{self, Read};

/// Hard ceiling on stdin input. Multi-megabyte pastes are legitimate input;
/// this only guards against an unbounded stream.
pub const MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// JSON fields recognized by the generic format, checked in order.
const GENERIC_COMMAND_KEYS: [&str; 5] = ["command", "cmd", "input", "shell", "script"];

/// Input calling convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Detect JSON envelopes, fall back to plain text.
    #[default]
    Auto,
    /// Treat the input as the raw command text.
    Plain,
    /// Claude Code PreToolUse: `{"tool_input":{"command":"..."}}`.
    ClaudeCode,
    /// Generic JSON with a recognized command field.
    Json,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Plain => "plain",
            Self::ClaudeCode => "claude-code",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Result of unwrapping one input envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub command: String,
    pub format: InputFormat,
}

/// Error reading command text from stdin.
#[derive(Debug)]
pub enum InputError {
    /// Failed to read from stdin.
    Io(io::Error),
    /// Input exceeded the size ceiling.
    InputTooLarge(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read stdin: {err}"),
            Self::InputTooLarge(len) => {
                write!(f, "input of {len} bytes exceeds the {MAX_INPUT_BYTES} byte limit")
            }
        }
    }
}

/// Read all of stdin up front, bounded by `max_bytes`.
pub fn read_stdin(max_bytes: usize) -> Result<String, InputError> {
    let mut input = String::with_capacity(256);
    {
        let stdin = io::stdin();
        // Read up to limit + 1 to detect overflow
        let mut handle = stdin.lock().take(max_bytes as u64 + 1);
        handle.read_to_string(&mut input).map_err(InputError::Io)?;
    }

    if input.len() > max_bytes {
        return Err(InputError::InputTooLarge(input.len()));
    }

    Ok(input)
}

/// Unwrap the command text from `input` according to `format`.
///
/// Unrecognized or malformed JSON never fails: the raw input passes through
/// as the command text, and the gate decides on that.
#[must_use]
pub fn parse_input(input: &str, format: InputFormat) -> ParseResult {
    match format {
        InputFormat::Plain => ParseResult {
            command: input.to_string(),
            format: InputFormat::Plain,
        },
        InputFormat::ClaudeCode => ParseResult {
            command: claude_code_command(input).unwrap_or_else(|| input.to_string()),
            format: InputFormat::ClaudeCode,
        },
        InputFormat::Json => ParseResult {
            command: json_command(input).unwrap_or_else(|| input.to_string()),
            format: InputFormat::Json,
        },
        InputFormat::Auto => {
            let trimmed = input.trim();
            if trimmed.starts_with('{') {
                if let Some(command) = json_command(trimmed) {
                    return ParseResult {
                        command,
                        format: InputFormat::Json,
                    };
                }
            }
            ParseResult {
                command: input.to_string(),
                format: InputFormat::Plain,
            }
        }
    }
}

fn claude_code_command(input: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(input).ok()?;
    parsed
        .get("tool_input")?
        .get("command")?
        .as_str()
        .map(str::to_string)
}

fn json_command(input: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(input).ok()?;

    // Claude Code envelope first, then the generic field names.
    if let Some(command) = parsed
        .get("tool_input")
        .and_then(|tool_input| tool_input.get("command"))
        .and_then(serde_json::Value::as_str)
    {
        return Some(command.to_string());
    }

    GENERIC_COMMAND_KEYS.iter().find_map(|key| {
        parsed
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    mod plain {
        use super::*;

        #[test]
        fn passes_text_through_untouched() {
            let result = parse_input("git commit --no-verify", InputFormat::Plain);
            assert_eq!(result.command, "git commit --no-verify");
            assert_eq!(result.format, InputFormat::Plain);
        }

        #[test]
        fn plain_mode_does_not_unwrap_json() {
            let result = parse_input(r#"{"command":"git push"}"#, InputFormat::Plain);
            assert_eq!(result.command, r#"{"command":"git push"}"#);
        }
    }

    mod claude_code {
        use super::*;

        #[test]
        fn extracts_tool_input_command() {
            let result = parse_input(
                r#"{"tool_input":{"command":"git commit --no-verify"}}"#,
                InputFormat::ClaudeCode,
            );
            assert_eq!(result.command, "git commit --no-verify");
            assert_eq!(result.format, InputFormat::ClaudeCode);
        }

        #[test]
        fn extracts_command_with_surrounding_envelope_fields() {
            let result = parse_input(
                r#"{"tool_name":"Bash","tool_input":{"command":"git push","description":"x"}}"#,
                InputFormat::ClaudeCode,
            );
            assert_eq!(result.command, "git push");
        }

        #[test]
        fn falls_back_to_raw_text_on_malformed_json() {
            let result = parse_input("not json", InputFormat::ClaudeCode);
            assert_eq!(result.command, "not json");
        }

        #[test]
        fn falls_back_when_command_is_not_a_string() {
            let result = parse_input(
                r#"{"tool_input":{"command":123}}"#,
                InputFormat::ClaudeCode,
            );
            assert_eq!(result.command, r#"{"tool_input":{"command":123}}"#);
        }
    }

    mod json {
        use super::*;

        #[test]
        fn recognizes_each_generic_key() {
            for key in GENERIC_COMMAND_KEYS {
                let input = format!(r#"{{"{key}":"git push"}}"#);
                let result = parse_input(&input, InputFormat::Json);
                assert_eq!(result.command, "git push", "key: {key}");
            }
        }

        #[test]
        fn prefers_claude_envelope_over_generic_keys() {
            let result = parse_input(
                r#"{"command":"echo outer","tool_input":{"command":"git push"}}"#,
                InputFormat::Json,
            );
            assert_eq!(result.command, "git push");
        }

        #[test]
        fn falls_back_when_no_recognized_field() {
            let result = parse_input(r#"{"foo":"bar"}"#, InputFormat::Json);
            assert_eq!(result.command, r#"{"foo":"bar"}"#);
        }
    }

    mod auto {
        use super::*;

        #[test]
        fn plain_text_stays_plain() {
            let result = parse_input("git commit -m test", InputFormat::Auto);
            assert_eq!(result.command, "git commit -m test");
            assert_eq!(result.format, InputFormat::Plain);
        }

        #[test]
        fn detects_generic_json() {
            let result = parse_input(r#"{"command":"git commit --no-verify"}"#, InputFormat::Auto);
            assert_eq!(result.command, "git commit --no-verify");
            assert_eq!(result.format, InputFormat::Json);
        }

        #[test]
        fn detects_claude_code_envelope() {
            let result = parse_input(
                r#"  {"tool_input":{"command":"git push"}}  "#,
                InputFormat::Auto,
            );
            assert_eq!(result.command, "git push");
            assert_eq!(result.format, InputFormat::Json);
        }

        #[test]
        fn json_without_command_field_is_treated_as_plain() {
            let result = parse_input(r#"{"foo":"bar"}"#, InputFormat::Auto);
            assert_eq!(result.command, r#"{"foo":"bar"}"#);
            assert_eq!(result.format, InputFormat::Plain);
        }

        #[test]
        fn brace_prefixed_non_json_is_treated_as_plain() {
            let result = parse_input("{ git commit; }", InputFormat::Auto);
            assert_eq!(result.command, "{ git commit; }");
            assert_eq!(result.format, InputFormat::Plain);
        }
    }

    #[test]
    fn input_error_messages_name_the_cause() {
        let too_large = InputError::InputTooLarge(MAX_INPUT_BYTES + 1);
        assert!(too_large.to_string().contains("exceeds"));

        let io = InputError::Io(io::Error::other("boom"));
        assert!(io.to_string().contains("stdin"));
    }
}
