//! Health checks for an oegen installation.
//!
//! ## Checks Performed
//!
//! - Platform detection
//! - Install root resolution
//! - Manifest loading and validation
//! - Presence and kind of every template source (missing base sources are
//!   failures, missing optional module sources are warnings)
//! - Launcher interpreter availability

use std::path::Path;

use crate::launcher::{LaunchMode, Platform, resolve_platform_command};
use crate::paths::find_template_root;
use crate::project::{EntryKind, TemplateEntry, TemplateManifest};

/// Status of a doctor check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorCheckStatus {
    /// Check passed.
    Ok,
    /// Check passed with warnings.
    Warning,
    /// Check failed.
    Error,
}

/// Result of a single doctor check.
#[derive(Debug, Clone)]
pub struct DoctorCheck {
    pub name: String,
    pub status: DoctorCheckStatus,
    pub message: String,
}

impl DoctorCheck {
    #[must_use]
    pub fn ok(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DoctorCheckStatus::Ok,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DoctorCheckStatus::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DoctorCheckStatus::Error,
            message: message.into(),
        }
    }

    /// Returns the CLI prefix for this check status.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self.status {
            DoctorCheckStatus::Ok => "[OK]",
            DoctorCheckStatus::Warning => "[WARN]",
            DoctorCheckStatus::Error => "[FAIL]",
        }
    }
}

/// Runs all doctor checks and returns the results.
///
/// Checks that depend on an earlier one (sources need a manifest, which
/// needs an install root) are skipped when it fails.
#[must_use]
pub fn run_all_checks(templates: Option<&Path>, manifest_path: Option<&Path>) -> Vec<DoctorCheck> {
    let mut checks = Vec::new();

    let platform = match Platform::detect() {
        Ok(platform) => {
            checks.push(DoctorCheck::ok("Platform", platform.to_string()));
            Some(platform)
        }
        Err(e) => {
            checks.push(DoctorCheck::error("Platform", e.to_string()));
            None
        }
    };

    match find_template_root(templates) {
        Ok(root) => {
            checks.push(DoctorCheck::ok("Template root", root.display().to_string()));
            match TemplateManifest::load(&root, manifest_path) {
                Ok(manifest) => {
                    checks.push(DoctorCheck::ok(
                        "Manifest",
                        format!(
                            "{} entries, {} optional modules",
                            manifest.entries.len(),
                            manifest.modules.len()
                        ),
                    ));
                    checks.extend(check_sources(&root, &manifest));
                }
                Err(e) => checks.push(DoctorCheck::error("Manifest", e.to_string())),
            }
        }
        Err(e) => checks.push(DoctorCheck::error("Template root", e.to_string())),
    }

    if let Some(platform) = platform {
        checks.push(check_interpreter(platform));
    }

    checks
}

/// Checks every base and module source under `root`.
#[must_use]
pub fn check_sources(root: &Path, manifest: &TemplateManifest) -> Vec<DoctorCheck> {
    let mut checks: Vec<DoctorCheck> = manifest
        .entries
        .iter()
        .filter_map(|entry| {
            source_problem(root, entry).map(|problem| DoctorCheck::error("Template source", problem))
        })
        .collect();

    for module in &manifest.modules {
        checks.extend(module.entries.iter().filter_map(|entry| {
            source_problem(root, entry).map(|problem| {
                DoctorCheck::warning(format!("Module '{}'", module.name), problem)
            })
        }));
    }

    if checks.is_empty() {
        checks.push(DoctorCheck::ok(
            "Template sources",
            "All template sources present",
        ));
    }
    checks
}

fn source_problem(root: &Path, entry: &TemplateEntry) -> Option<String> {
    let path = root.join(&entry.source);
    let Ok(metadata) = std::fs::metadata(&path) else {
        return Some(format!("{} is missing", entry.source));
    };
    match entry.kind {
        EntryKind::File if !metadata.is_file() => Some(format!("{} is not a file", entry.source)),
        EntryKind::Directory if !metadata.is_dir() => {
            Some(format!("{} is not a directory", entry.source))
        }
        EntryKind::File | EntryKind::Directory => None,
    }
}

fn check_interpreter(platform: Platform) -> DoctorCheck {
    let program = resolve_platform_command(platform, LaunchMode::Default).program;
    match which::which(&program) {
        Ok(path) => DoctorCheck::ok("Launcher shell", path.display().to_string()),
        Err(_) => DoctorCheck::warning(
            "Launcher shell",
            format!("'{program}' not found in PATH; 'oegen run' will not work"),
        ),
    }
}
