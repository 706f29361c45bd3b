//! Version command for the oegen CLI.
//!
//! `oegen version` prints the package version. `-v` adds what matters when
//! a project fails to generate or launch: the build commit, the launcher
//! script folder for this host, and which install root and manifest `new`
//! would use right now.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::launcher::Platform;
use crate::paths::find_template_root;
use crate::project::manifest::MANIFEST_FILE;

/// Arguments for the version command.
#[derive(Args)]
pub struct VersionArgs {
    /// Also show the build commit, script folder and install root.
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

/// Executes the version command.
#[allow(clippy::unnecessary_wraps)]
pub fn execute(args: &VersionArgs) -> Result<()> {
    let install_root = if args.verbose {
        Some(find_template_root(None).ok())
    } else {
        None
    };
    print!("{}", render(install_root.as_ref().map(Option::as_deref)));
    Ok(())
}

/// Renders the report; `install_root` is `Some` only in verbose mode.
fn render(install_root: Option<Option<&Path>>) -> String {
    let mut out = format!("oegen {}\n", env!("CARGO_PKG_VERSION"));
    let Some(install_root) = install_root else {
        return out;
    };

    let script_folder =
        Platform::detect().map_or_else(|_| String::from("unsupported"), |p| p.to_string());

    out.push('\n');
    out.push_str(&format!(
        "  Commit:       {}\n",
        option_env!("OEGEN_GIT_COMMIT").unwrap_or("unknown")
    ));
    out.push_str(&format!(
        "  Host:         {}-{}\n",
        std::env::consts::OS,
        std::env::consts::ARCH
    ));
    out.push_str(&format!("  Scripts:      {script_folder}/\n"));
    match install_root {
        Some(root) => {
            out.push_str(&format!("  Install root: {}\n", root.display()));
            out.push_str(&format!("  Manifest:     {}\n", manifest_source(root)));
        }
        None => out.push_str("  Install root: not found (set OENGINE_HOME)\n"),
    }
    out
}

fn manifest_source(root: &Path) -> String {
    let file = root.join(MANIFEST_FILE);
    if file.is_file() {
        file.display().to_string()
    } else {
        String::from("built-in")
    }
}
