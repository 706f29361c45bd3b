//! Modules command for the oegen CLI.
//!
//! Lists the optional modules `oegen new --with <MODULE>` accepts.
//!
//! ## Usage
//!
//! ```bash
//! oegen modules          # Human-readable list
//! oegen modules --json   # JSON output
//! ```
//!
//! ## Output Format
//!
//! ```text
//! Optional modules:
//!
//!   editor - Editor bundle with a type registry (1 entries, 2 generated files)
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::paths::find_template_root;
use crate::project::TemplateManifest;
use crate::project::manifest::OptionalModule;

/// Arguments for the modules command.
#[derive(Args)]
pub struct ModulesArgs {
    /// Show modules in JSON format.
    #[clap(long, short = 'j')]
    pub json: bool,

    /// Install root holding the templates (overrides OENGINE_HOME).
    #[clap(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Manifest file to use instead of the install root's.
    #[clap(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

/// Module information for JSON output.
#[derive(Debug, Clone, Serialize)]
struct ModuleInfo<'a> {
    name: &'a str,
    description: &'a str,
    entries: Vec<&'a str>,
    artifacts: Vec<&'a str>,
}

impl<'a> From<&'a OptionalModule> for ModuleInfo<'a> {
    fn from(module: &'a OptionalModule) -> Self {
        Self {
            name: &module.name,
            description: &module.description,
            entries: module.entries.iter().map(|e| e.source.as_str()).collect(),
            artifacts: module.artifacts.iter().map(|a| a.path.as_str()).collect(),
        }
    }
}

/// Executes the modules command.
///
/// # Errors
///
/// Returns an error if the install root cannot be located or the manifest is
/// invalid.
pub fn execute(args: &ModulesArgs) -> Result<()> {
    let root = find_template_root(args.templates.as_deref())?;
    let manifest = TemplateManifest::load(&root, args.manifest.as_deref())?;

    if args.json {
        println!("{}", render_json(&manifest)?);
    } else {
        print!("{}", render_text(&manifest));
    }
    Ok(())
}

fn render_json(manifest: &TemplateManifest) -> Result<String> {
    let infos: Vec<ModuleInfo<'_>> = manifest.modules.iter().map(ModuleInfo::from).collect();
    Ok(serde_json::to_string_pretty(&infos)?)
}

fn render_text(manifest: &TemplateManifest) -> String {
    if manifest.modules.is_empty() {
        return String::from("No optional modules defined.\n");
    }

    let mut out = String::from("Optional modules:\n\n");
    for module in &manifest.modules {
        let summary = format!(
            "({} entries, {} generated files)",
            module.entries.len(),
            module.artifacts.len()
        );
        if module.description.is_empty() {
            out.push_str(&format!("  {} {summary}\n", module.name));
        } else {
            out.push_str(&format!(
                "  {} - {} {summary}\n",
                module.name, module.description
            ));
        }
    }
    out
}
