//! Template manifest: what gets copied into every new project.
//!
//! The manifest is a curated list rather than a scan of the install root, so
//! build outputs or stray files next to the templates never leak into
//! generated projects. It is loaded once at startup and passed by reference
//! to the provisioner.
//!
//! ## Manifest Format
//!
//! A built-in default is used unless an `oegen.toml` file is present at the
//! install root (or passed explicitly with `--manifest`):
//!
//! ```toml
//! [[entries]]
//! kind = "directory"
//! source = "assets"
//!
//! [[entries]]
//! kind = "file"
//! source = "ols.json"
//!
//! [[artifacts]]
//! path = "notes.txt"
//! content = "hello"
//!
//! [[modules]]
//! name = "editor"
//! description = "Editor bundle"
//!
//! [[modules.entries]]
//! kind = "directory"
//! source = "editor"
//! ```
//!
//! Entries copy to `<project>/<basename of source>`. Optional modules are
//! appended after the base entries, in manifest order.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::ffi::OsStr;
use std::path::{Component, Path};

use crate::errors::{OegenError, ProvisionError};

/// File name of a manifest override at the install root.
pub const MANIFEST_FILE: &str = "oegen.toml";

/// Name of the built-in optional editor module.
pub const EDITOR_MODULE: &str = "editor";

/// JSON registry stub written by the editor module.
pub const REGISTRY_JSON: &str = r#"{
    "version": 1,
    "components": "src/components",
    "systems": "src/systems",
    "scenes": "assets/scenes",
    "hot_reload": true
}
"#;

/// Starter source file written by the editor module.
pub const EDITOR_MAIN_SOURCE: &str = r"package main

// Components and systems exposed to the editor are registered here.
register_editor_types :: proc() {
}
";

/// Whether a template entry is a single file or a whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One unit to copy from the install root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub kind: EntryKind,
    /// Path relative to the install root.
    pub source: String,
}

impl TemplateEntry {
    #[must_use]
    pub fn file(source: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::File,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn directory(source: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Directory,
            source: source.into(),
        }
    }

    /// The name this entry takes inside the project directory.
    #[must_use]
    pub fn destination_name(&self) -> Option<&OsStr> {
        Path::new(&self.source).file_name()
    }
}

/// A static text payload written verbatim into the new project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// Path relative to the project directory.
    pub path: String,
    pub content: String,
}

impl GeneratedArtifact {
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A named group of entries and artifacts included only on request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalModule {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub entries: Vec<TemplateEntry>,
    #[serde(default)]
    pub artifacts: Vec<GeneratedArtifact>,
}

/// The full provisioning configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Entries copied into every project, in order.
    #[serde(default)]
    pub entries: Vec<TemplateEntry>,

    /// Artifacts written into every project.
    #[serde(default)]
    pub artifacts: Vec<GeneratedArtifact>,

    /// Optional modules, in the order they are appended.
    #[serde(default)]
    pub modules: Vec<OptionalModule>,
}

/// Entries and artifacts selected for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub entries: Vec<&'a TemplateEntry>,
    pub artifacts: Vec<&'a GeneratedArtifact>,
}

impl TemplateManifest {
    /// The manifest shipped with the engine.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                TemplateEntry::directory("resources"),
                TemplateEntry::directory("macos"),
                TemplateEntry::directory("macos-arm64"),
                TemplateEntry::directory("assets"),
                TemplateEntry::directory("linux"),
                TemplateEntry::directory("oengine"),
                TemplateEntry::directory("src"),
                TemplateEntry::directory("windows"),
                TemplateEntry::file("ols.json"),
                TemplateEntry::file("odinfmt.json"),
                TemplateEntry::file("run.py"),
            ],
            artifacts: Vec::new(),
            modules: vec![OptionalModule {
                name: String::from(EDITOR_MODULE),
                description: String::from("Editor bundle with a type registry"),
                entries: vec![TemplateEntry::directory("editor")],
                artifacts: vec![
                    GeneratedArtifact::new("registry.json", REGISTRY_JSON),
                    GeneratedArtifact::new("src/editor_main.odin", EDITOR_MAIN_SOURCE),
                ],
            }],
        }
    }

    /// Parses and validates a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`OegenError::ManifestError`] if the text is not valid TOML for
    /// this format or fails [`TemplateManifest::validate`].
    pub fn from_toml(text: &str) -> Result<Self, OegenError> {
        let manifest: Self = toml::from_str(text)
            .map_err(|e| OegenError::manifest_error(format!("invalid TOML: {e}")))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Loads the manifest for an install root.
    ///
    /// Uses `override_path` when given, then `<root>/oegen.toml` when it
    /// exists, and falls back to [`TemplateManifest::builtin`].
    ///
    /// # Errors
    ///
    /// Returns [`OegenError::ManifestError`] if a manifest file cannot be read
    /// or is invalid.
    pub fn load(root: &Path, override_path: Option<&Path>) -> Result<Self, OegenError> {
        let candidate = match override_path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(root.join(MANIFEST_FILE)).filter(|p| p.is_file()),
        };

        let Some(path) = candidate else {
            log::debug!("no {MANIFEST_FILE} in {}, using built-in manifest", root.display());
            return Ok(Self::builtin());
        };

        log::debug!("loading manifest from {}", path.display());
        let text = std::fs::read_to_string(&path).map_err(|e| {
            OegenError::manifest_error(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
    }

    /// Checks structural rules the provisioner relies on.
    ///
    /// # Rules
    ///
    /// - Entry sources and artifact paths are non-empty, relative, and never
    ///   contain `..`
    /// - Module names are non-empty and unique
    /// - No two entries (base plus every module) share a destination name
    /// - No two artifacts share a path
    ///
    /// # Errors
    ///
    /// Returns [`OegenError::ManifestError`] describing the first violation.
    pub fn validate(&self) -> Result<(), OegenError> {
        let mut module_names = HashSet::new();
        for module in &self.modules {
            if module.name.trim().is_empty() {
                return Err(OegenError::manifest_error("module name cannot be empty"));
            }
            if !module_names.insert(module.name.as_str()) {
                return Err(OegenError::manifest_error(format!(
                    "duplicate module '{}'",
                    module.name
                )));
            }
        }

        let mut destinations = HashSet::new();
        let all_entries = self
            .entries
            .iter()
            .chain(self.modules.iter().flat_map(|m| m.entries.iter()));
        for entry in all_entries {
            check_relative(&entry.source, "entry source")?;
            let Some(name) = entry.destination_name() else {
                return Err(OegenError::manifest_error(format!(
                    "entry source '{}' has no file name",
                    entry.source
                )));
            };
            if !destinations.insert(name) {
                return Err(OegenError::manifest_error(format!(
                    "entries collide on '{}'",
                    name.to_string_lossy()
                )));
            }
        }

        let mut artifact_paths = HashSet::new();
        let all_artifacts = self
            .artifacts
            .iter()
            .chain(self.modules.iter().flat_map(|m| m.artifacts.iter()));
        for artifact in all_artifacts {
            check_relative(&artifact.path, "artifact path")?;
            if !artifact_paths.insert(Path::new(&artifact.path)) {
                return Err(OegenError::manifest_error(format!(
                    "duplicate artifact '{}'",
                    artifact.path
                )));
            }
        }

        Ok(())
    }

    /// Looks up an optional module by name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&OptionalModule> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Selects the entries and artifacts for a set of requested modules.
    ///
    /// Base entries come first, followed by each requested module in
    /// manifest order. Request order does not matter.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::UnknownModule`] for the first requested name
    /// the manifest does not define.
    pub fn select(&self, modules: &BTreeSet<String>) -> Result<Selection<'_>, ProvisionError> {
        if let Some(unknown) = modules.iter().find(|name| self.module(name).is_none()) {
            return Err(ProvisionError::UnknownModule {
                name: unknown.clone(),
            });
        }

        let requested: Vec<&OptionalModule> = self
            .modules
            .iter()
            .filter(|m| modules.contains(&m.name))
            .collect();

        let entries = self
            .entries
            .iter()
            .chain(requested.iter().flat_map(|m| m.entries.iter()))
            .collect();
        let artifacts = self
            .artifacts
            .iter()
            .chain(requested.iter().flat_map(|m| m.artifacts.iter()))
            .collect();

        Ok(Selection { entries, artifacts })
    }
}

fn check_relative(path: &str, what: &str) -> Result<(), OegenError> {
    if path.trim().is_empty() {
        return Err(OegenError::manifest_error(format!("{what} cannot be empty")));
    }
    let escapes = Path::new(path)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(OegenError::manifest_error(format!(
            "{what} '{path}' must be relative and stay inside its root"
        )));
    }
    Ok(())
}
