//! Launch command resolution and execution.
//!
//! [`resolve_platform_command`] is a pure mapping from platform and mode to
//! the folder and script to run; [`launch`] performs the process spawn.
//!
//! | mode      | working dir          | script                 |
//! |-----------|----------------------|------------------------|
//! | `Default` | `<platform>`         | `run.sh` / `run.bat`   |
//! | `Debug`   | `<platform>`         | `run_debug.sh` / `.bat`|
//! | `Editor`  | `editor/<platform>`  | `run.sh` / `run.bat`   |

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use super::platform::Platform;
use crate::errors::OegenError;

/// Which run variant to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    #[default]
    Default,
    Editor,
    Debug,
}

/// A resolved command, relative to a project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub working_dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Renders the command line for logs and messages.
    #[must_use]
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Maps a platform and mode to the folder and script to run.
#[must_use]
pub fn resolve_platform_command(platform: Platform, mode: LaunchMode) -> LaunchCommand {
    let mut working_dir = PathBuf::new();
    if mode == LaunchMode::Editor {
        working_dir.push("editor");
    }
    working_dir.push(platform.dir_name());

    let stem = if mode == LaunchMode::Debug {
        "run_debug"
    } else {
        "run"
    };
    let script = format!("{stem}.{}", platform.script_extension());

    let (program, args) = if platform.is_windows() {
        ("cmd", vec![String::from("/C"), script])
    } else {
        ("sh", vec![script])
    };

    LaunchCommand {
        working_dir,
        program: String::from(program),
        args,
    }
}

/// Resolves the command for the running platform inside `project_dir`.
///
/// When the platform folder is missing and the platform has a fallback
/// (Apple Silicon to `macos`), the fallback folder is used instead.
///
/// # Errors
///
/// Returns [`OegenError::UnsupportedPlatform`] if the host has no scripts.
pub fn resolve_for_project(project_dir: &Path, mode: LaunchMode) -> Result<LaunchCommand> {
    let platform = Platform::detect()?;
    let command = resolve_platform_command(platform, mode);

    if !project_dir.join(&command.working_dir).is_dir()
        && let Some(fallback) = platform.fallback()
    {
        let alternative = resolve_platform_command(fallback, mode);
        if project_dir.join(&alternative.working_dir).is_dir() {
            log::warn!(
                "{} not found, falling back to {}",
                command.working_dir.display(),
                alternative.working_dir.display()
            );
            return Ok(alternative);
        }
    }

    Ok(command)
}

/// Runs `command` from `project_dir` and waits for it.
///
/// The caller's working directory is left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The working directory does not exist
/// - The interpreter is not on PATH
/// - The process cannot be spawned
/// - The script exits with a non-zero code ([`OegenError::ProcessExitCode`])
pub fn launch(project_dir: &Path, command: &LaunchCommand) -> Result<()> {
    let working_dir = project_dir.join(&command.working_dir);
    if !working_dir.is_dir() {
        anyhow::bail!("Launch directory not found: {}", working_dir.display());
    }

    check_interpreter_availability(&command.program)?;

    log::info!(
        "running '{}' in {}",
        command.display_line(),
        working_dir.display()
    );

    let status = Command::new(&command.program)
        .args(&command.args)
        .current_dir(&working_dir)
        .stdin(std::process::Stdio::inherit())
        .stdout(std::process::Stdio::inherit())
        .stderr(std::process::Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute '{}'", command.display_line()))?;

    if status.success() {
        Ok(())
    } else {
        let code = status.code().unwrap_or(1);
        Err(OegenError::process_exit_code(code).into())
    }
}

/// Checks that the script interpreter is available in PATH.
///
/// # Errors
///
/// Returns [`OegenError::InterpreterNotFound`] if it is not.
pub fn check_interpreter_availability(program: &str) -> Result<()> {
    if which::which(program).is_err() {
        return Err(OegenError::InterpreterNotFound {
            program: program.to_string(),
        }
        .into());
    }
    Ok(())
}
