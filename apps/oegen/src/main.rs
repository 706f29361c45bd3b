#![warn(clippy::pedantic)]

//! # Oengine project generator (oegen)
//!
//! `oegen` creates new Oengine projects from the templates shipped with the
//! engine and starts existing projects through their platform run scripts.
//!
//! ## Subcommands
//!
//! - `new` - Create a new project from the template manifest
//! - `modules` - List optional modules (e.g. the editor bundle)
//! - `run` - Run a project's platform script (`--editor`, `--debug`)
//! - `doctor` - Check the install root and templates
//! - `version` - Display version information
//!
//! ## Examples
//!
//! Create a project with the editor bundle:
//! ```bash
//! oegen new MyGame --with editor
//! ```
//!
//! Start it in debug mode:
//! ```bash
//! cd MyGame && oegen run --debug
//! ```

mod commands;
mod doctor;
mod errors;
mod launcher;
mod paths;
mod project;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{doctor as doctor_cmd, modules, new, run, version};
use errors::OegenError;

/// Oengine project generator and launcher.
#[derive(Parser)]
#[command(
    name = "oegen",
    author,
    version,
    about = "Create and run Oengine projects",
    long_about = "The 'oegen' command copies the engine templates into new projects \
    and starts projects through their platform run scripts.",
    after_help = "\
TEMPLATE RESOLUTION:
    The install root holding the templates is located using this priority order:
    1. --templates <DIR>
    2. OENGINE_HOME environment variable
    3. Nearest ancestor of the oegen executable containing oengine/ or oegen.toml

ENVIRONMENT VARIABLES:
    OENGINE_HOME            Install root holding the templates
    RUST_LOG                Log filter (default: warn)"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the oegen CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new Oengine project.
    ///
    /// Copies the template folders and files into a new directory and writes
    /// the generated files of any requested optional modules. Fails without
    /// touching anything if the directory already exists.
    New(new::NewArgs),

    /// List optional modules.
    ///
    /// Shows the modules that can be added with `oegen new --with <MODULE>`.
    Modules(modules::ModulesArgs),

    /// Run a project.
    ///
    /// Executes the platform run script of a project and exits with its
    /// exit code.
    Run(run::RunArgs),

    /// Check installation health.
    ///
    /// Verifies the install root, the manifest and every template source.
    Doctor(doctor_cmd::DoctorArgs),

    /// Display version information.
    Version(version::VersionArgs),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        let exit_code = handle_error(&e);
        std::process::exit(exit_code);
    }
}

/// Handles an error and returns the appropriate exit code.
///
/// For `ProcessExitCode` errors, returns the embedded exit code without
/// printing an error message (the script already printed its output).
/// For all other errors, prints the error and returns exit code 1.
fn handle_error(e: &anyhow::Error) -> i32 {
    if let Some(OegenError::ProcessExitCode { code }) = e.downcast_ref::<OegenError>() {
        return *code;
    }
    eprintln!("Error: {e:?}");
    1
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New(args) => new::execute(&args),
        Commands::Modules(args) => modules::execute(&args),
        Commands::Run(args) => run::execute(&args),
        Commands::Doctor(args) => doctor_cmd::execute(&args),
        Commands::Version(args) => version::execute(&args),
    }
}
