//! Run command for the oegen CLI.
//!
//! Starts a generated project through its platform run script.
//!
//! ## Usage
//!
//! ```bash
//! oegen run                   # <platform>/run.sh (run.bat on Windows)
//! oegen run --debug           # <platform>/run_debug.sh
//! oegen run --editor          # editor/<platform>/run.sh
//! oegen run --project MyGame  # run a project outside the current directory
//! ```
//!
//! The script's exit code becomes the exit code of `oegen`.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::launcher::{LaunchMode, launch, resolve_for_project};

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Run the editor build instead of the game.
    #[clap(long, conflicts_with = "debug")]
    pub editor: bool,

    /// Run the debug script.
    #[clap(long)]
    pub debug: bool,

    /// Project directory (defaults to current directory).
    #[clap(long, default_value = ".")]
    pub project: PathBuf,
}

impl RunArgs {
    #[must_use]
    pub fn mode(&self) -> LaunchMode {
        if self.editor {
            LaunchMode::Editor
        } else if self.debug {
            LaunchMode::Debug
        } else {
            LaunchMode::Default
        }
    }
}

/// Executes the run command.
///
/// # Errors
///
/// Returns an error if the platform is unsupported, the script folder or
/// interpreter is missing, or the script exits with a non-zero code
/// (`OegenError::ProcessExitCode`).
pub fn execute(args: &RunArgs) -> Result<()> {
    let command = resolve_for_project(&args.project, args.mode())?;
    launch(&args.project, &command)
}
