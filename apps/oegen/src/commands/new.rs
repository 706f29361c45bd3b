//! New project command for the oegen CLI.
//!
//! Creates a new Oengine project by copying the template manifest from the
//! install root.
//!
//! ## Usage
//!
//! ```bash
//! oegen new                              # ./OengineProject
//! oegen new MyGame                       # ./MyGame
//! oegen new MyGame --path ~/games        # ~/games/MyGame
//! oegen new MyGame --with editor         # include the editor bundle
//! ```
//!
//! ## Project Structure
//!
//! With the built-in manifest:
//!
//! ```text
//! MyGame/
//! +-- assets/  linux/  macos/  macos-arm64/  windows/
//! +-- oengine/  resources/  src/
//! +-- ols.json  odinfmt.json  run.py
//! +-- editor/                     (--with editor)
//! +-- registry.json               (--with editor)
//! +-- src/editor_main.odin        (--with editor)
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::paths::find_template_root;
use crate::project::manifest::EDITOR_MODULE;
use crate::project::{ProvisionRequest, Provisioner, TemplateManifest};

/// Arguments for the `new` command.
#[derive(Args)]
pub struct NewArgs {
    /// Name of the project directory (defaults to "OengineProject").
    pub name: Option<String>,

    /// Directory the project is created in (defaults to current directory).
    #[clap(long, short = 'p', default_value = ".")]
    pub path: PathBuf,

    /// Optional module to include (repeatable), e.g. `--with editor`.
    #[clap(long = "with", value_name = "MODULE")]
    pub modules: Vec<String>,

    /// Install root holding the templates (overrides OENGINE_HOME).
    #[clap(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Manifest file to use instead of the install root's.
    #[clap(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

/// Executes the `new` command.
///
/// # Errors
///
/// Returns an error if:
/// - The install root cannot be located or the manifest is invalid
/// - A requested module is unknown
/// - The target directory already exists
/// - Copying or writing any file fails
pub fn execute(args: &NewArgs) -> Result<()> {
    let root = find_template_root(args.templates.as_deref())?;
    let manifest = TemplateManifest::load(&root, args.manifest.as_deref())?;

    let request = args.modules.iter().fold(
        ProvisionRequest::new(&args.path, args.name.clone().unwrap_or_default()),
        |request, module| request.with_module(module.as_str()),
    );

    let project_path = Provisioner::new(root, &manifest).provision(&request)?;

    println!("Created project '{}'", request.resolved_name());
    println!();
    println!("Next steps:");
    println!("  cd {}", project_path.display());
    if request.include_optional_modules.contains(EDITOR_MODULE) {
        println!("  oegen run --editor");
    } else {
        println!("  oegen run");
    }

    Ok(())
}
