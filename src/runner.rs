//! Subprocess helpers
//!
//! Every external command inherits the parent's stdio so fastlane, gem and
//! bundler can prompt interactively; no internal timeout is imposed (the CI
//! environment owns any outer deadline).

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{MatchsyncError, Result};

/// Render a command for display, shell-quoting arguments where needed
pub fn printable(command: &[String]) -> String {
    shlex::try_join(command.iter().map(String::as_str))
        .unwrap_or_else(|_| command.join(" "))
}

/// Split the free-form options input with shell word rules
///
/// An empty input yields no tokens; malformed quoting is a fatal error.
pub fn split_options(options: &str) -> Result<Vec<String>> {
    if options.is_empty() {
        return Ok(Vec::new());
    }

    shlex::split(options).ok_or_else(|| MatchsyncError::OptionsParseFailed {
        options: options.to_string(),
    })
}

/// Run a command with inherited stdio, an optional working directory and
/// extra environment variables, failing on a non-zero exit
pub fn run(command: &[String], dir: Option<&Path>, envs: &[(&str, &str)]) -> Result<()> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| MatchsyncError::CommandFailed {
            command: String::new(),
            reason: "empty command".to_string(),
        })?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    for (key, value) in envs {
        cmd.env(key, value);
    }

    let status = cmd.status().map_err(|e| MatchsyncError::CommandFailed {
        command: printable(command),
        reason: e.to_string(),
    })?;

    if !status.success() {
        let reason = match status.code() {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        };
        return Err(MatchsyncError::CommandFailed {
            command: printable(command),
            reason,
        });
    }

    Ok(())
}
