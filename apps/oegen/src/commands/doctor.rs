//! Doctor command for the oegen CLI.
//!
//! Verifies that the install root and its templates are usable and reports
//! any issues.
//!
//! ## Usage
//!
//! ```bash
//! oegen doctor
//! oegen doctor --templates ~/src/oengine
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::doctor::{DoctorCheckStatus, run_all_checks};

/// Arguments for the doctor command.
#[derive(Args)]
pub struct DoctorArgs {
    /// Install root holding the templates (overrides OENGINE_HOME).
    #[clap(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Manifest file to use instead of the install root's.
    #[clap(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

/// Executes the doctor command.
///
/// Runs all health checks and displays the results.
///
/// # Errors
///
/// Never fails once checks have run; failures are reported in the output.
#[allow(clippy::unnecessary_wraps)]
pub fn execute(args: &DoctorArgs) -> Result<()> {
    println!("Checking oegen installation...");
    println!();

    let checks = run_all_checks(args.templates.as_deref(), args.manifest.as_deref());

    let mut has_errors = false;
    let mut has_warnings = false;

    for check in &checks {
        println!("  {} {}: {}", check.prefix(), check.name, check.message);
        match check.status {
            DoctorCheckStatus::Ok => {}
            DoctorCheckStatus::Warning => has_warnings = true,
            DoctorCheckStatus::Error => has_errors = true,
        }
    }

    println!();

    if has_errors {
        println!("Some checks failed. 'oegen new' will not be able to create projects.");
    } else if has_warnings {
        println!("Some warnings were found. Optional modules or 'oegen run' may not work.");
    } else {
        println!("All checks passed.");
    }

    Ok(())
}
