use std::path::Path;
use std::process::Command;

use serde::Deserialize;

/// Environment variable carrying the checked file to the linter command.
pub const FILE_ENV_VAR: &str = "LUAFILE";
/// Replaced by the checked file path inside command arguments.
pub const FILE_PLACEHOLDER: &str = "{file}";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintOutcome {
    pub output: String,
    pub error: Option<String>,
}

pub trait Linter {
    fn run_lint(&self, path: &Path) -> LintOutcome;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LintCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for LintCommand {
    #[cfg(windows)]
    fn default() -> Self {
        Self {
            program: "cmd".to_string(),
            args: vec![
                "/c".to_string(),
                "lua\\luac.exe -l -p %LUAFILE% | lua\\lua.exe globals.lua %LUAFILE%".to_string(),
            ],
        }
    }

    #[cfg(not(windows))]
    fn default() -> Self {
        Self {
            program: "sh".to_string(),
            args: vec![
                "-c".to_string(),
                "luac -l -p \"$LUAFILE\" | lua globals.lua \"$LUAFILE\"".to_string(),
            ],
        }
    }
}

/// Runs an external program once per file and captures stdout then stderr.
#[derive(Debug, Clone, Default)]
pub struct CommandLinter {
    command: LintCommand,
}

impl CommandLinter {
    pub fn new(command: LintCommand) -> Self {
        Self { command }
    }
}

impl Linter for CommandLinter {
    fn run_lint(&self, path: &Path) -> LintOutcome {
        let file = path.to_string_lossy();
        let result = Command::new(&self.command.program)
            .args(
                self.command
                    .args
                    .iter()
                    .map(|arg| arg.replace(FILE_PLACEHOLDER, &file)),
            )
            .env(FILE_ENV_VAR, path)
            .output();

        match result {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                let error = if output.status.success() {
                    None
                } else {
                    Some(format!("{} exited with {}", self.command.program, output.status))
                };
                LintOutcome {
                    output: text,
                    error,
                }
            }
            Err(error) => LintOutcome {
                output: String::new(),
                error: Some(format!("failed to start {}: {}", self.command.program, error)),
            },
        }
    }
}

#[cfg(test)]
mod linter_tests {
    use super::*;

    fn linter(program: &str, args: &[&str]) -> CommandLinter {
        CommandLinter::new(LintCommand {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        })
    }

    #[test]
    fn lint_command_deserializes_with_default_args() {
        let command = parse_command(r#"{"program":"luacheck"}"#);
        assert_eq!(command.program, "luacheck");
        assert!(command.args.is_empty());
    }

    fn parse_command(raw: &str) -> LintCommand {
        mk_core::config::parse_config(&format!("{{\"config\":{}}}", raw))
            .expect("command should deserialize")
    }

    #[cfg(unix)]
    #[test]
    fn command_linter_passes_file_through_env_and_placeholder() {
        let outcome = linter("sh", &["-c", "echo \"env=$LUAFILE arg=$0\"", "{file}"])
            .run_lint(Path::new("/tmp/addon.lua"));

        assert_eq!(outcome.error, None);
        assert_eq!(outcome.output, "env=/tmp/addon.lua arg=/tmp/addon.lua\n");
    }

    #[cfg(unix)]
    #[test]
    fn command_linter_collects_stderr_and_exit_status() {
        let outcome = linter("sh", &["-c", "echo out; echo err >&2; exit 3"])
            .run_lint(Path::new("x.lua"));

        assert_eq!(outcome.output, "out\nerr\n");
        assert!(outcome
            .error
            .as_deref()
            .is_some_and(|error| error.starts_with("sh exited with")));
    }

    #[test]
    fn command_linter_reports_spawn_failure() {
        let outcome = linter("mk-lint-no-such-program", &[]).run_lint(Path::new("x.lua"));

        assert!(outcome.output.is_empty());
        assert!(outcome
            .error
            .as_deref()
            .is_some_and(|error| error.starts_with("failed to start mk-lint-no-such-program")));
    }
}
