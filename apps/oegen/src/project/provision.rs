//! Project provisioning.
//!
//! [`Provisioner::provision`] materializes a new project directory from the
//! template manifest:
//!
//! 1. Resolve the project name (empty or whitespace-only names become
//!    [`DEFAULT_PROJECT_NAME`])
//! 2. Select base entries plus requested optional modules
//! 3. Refuse names that would leave the destination, and refuse to continue
//!    if `<destination>/<name>` already exists
//! 4. Create the project directory
//! 5. Copy every entry in manifest order
//! 6. Write every generated artifact
//!
//! The existence check in step 3 happens once, up front. A failure after it
//! aborts the remaining steps and leaves the partially populated directory in
//! place for the user to inspect or delete.

use std::collections::{BTreeSet, HashSet};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::ProvisionError;
use crate::project::manifest::{EntryKind, GeneratedArtifact, TemplateEntry, TemplateManifest};

/// Project name used when the caller supplies none.
pub const DEFAULT_PROJECT_NAME: &str = "OengineProject";

/// Parameters of a single "create project" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    /// Existing directory the project is created in.
    pub destination_root: PathBuf,
    /// Desired project directory name; may be empty.
    pub project_name: String,
    /// Optional modules to append to the base manifest.
    pub include_optional_modules: BTreeSet<String>,
}

impl ProvisionRequest {
    #[must_use]
    pub fn new(destination_root: impl Into<PathBuf>, project_name: impl Into<String>) -> Self {
        Self {
            destination_root: destination_root.into(),
            project_name: project_name.into(),
            include_optional_modules: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_module(mut self, name: impl Into<String>) -> Self {
        self.include_optional_modules.insert(name.into());
        self
    }

    /// The project name after defaulting.
    #[must_use]
    pub fn resolved_name(&self) -> &str {
        resolve_project_name(&self.project_name)
    }

    /// `destination_root / resolved_name`.
    #[must_use]
    pub fn target_dir(&self) -> PathBuf {
        self.destination_root.join(self.resolved_name())
    }
}

/// Returns `name` unchanged unless it is empty or whitespace-only.
#[must_use]
pub fn resolve_project_name(name: &str) -> &str {
    if name.trim().is_empty() {
        DEFAULT_PROJECT_NAME
    } else {
        name
    }
}

/// Whether joining `name` onto a directory stays below that directory.
///
/// Absolute paths, drive prefixes and `..` are rejected; plain relative
/// segments (including nested ones like `games/Demo`) are accepted.
fn stays_inside(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Copies templates from an install root according to a manifest.
#[derive(Debug, Clone)]
pub struct Provisioner<'a> {
    template_root: PathBuf,
    manifest: &'a TemplateManifest,
}

impl<'a> Provisioner<'a> {
    #[must_use]
    pub fn new(template_root: impl Into<PathBuf>, manifest: &'a TemplateManifest) -> Self {
        Self {
            template_root: template_root.into(),
            manifest,
        }
    }

    /// Creates and populates the project directory for `request`.
    ///
    /// # Returns
    ///
    /// The path of the created project directory.
    ///
    /// # Errors
    ///
    /// - [`ProvisionError::UnknownModule`],
    ///   [`ProvisionError::InvalidProjectName`] or
    ///   [`ProvisionError::DirectoryAlreadyExists`] before anything is written
    /// - [`ProvisionError::CreateFailed`], [`ProvisionError::CopyFailed`] or
    ///   [`ProvisionError::WriteFailed`] after partial work, which is kept
    pub fn provision(&self, request: &ProvisionRequest) -> Result<PathBuf, ProvisionError> {
        let selection = self.manifest.select(&request.include_optional_modules)?;

        let name = request.resolved_name();
        if !stays_inside(name) {
            return Err(ProvisionError::InvalidProjectName {
                name: name.to_string(),
            });
        }
        let target_dir = request.target_dir();

        // Dangling symlinks count as existing.
        if fs::symlink_metadata(&target_dir).is_ok() {
            return Err(ProvisionError::DirectoryAlreadyExists { path: target_dir });
        }

        log::info!(
            "provisioning {} from {}",
            target_dir.display(),
            self.template_root.display()
        );

        fs::create_dir(&target_dir).map_err(|source| ProvisionError::CreateFailed {
            path: target_dir.clone(),
            source,
        })?;

        let mut copied = HashSet::new();
        for entry in &selection.entries {
            self.copy_entry(entry, &target_dir, &mut copied)?;
        }

        for artifact in &selection.artifacts {
            write_artifact(artifact, &target_dir, &copied)?;
        }

        log::info!(
            "provisioned {} ({} entries, {} generated files)",
            target_dir.display(),
            selection.entries.len(),
            selection.artifacts.len()
        );
        Ok(target_dir)
    }

    fn copy_entry(
        &self,
        entry: &TemplateEntry,
        target_dir: &Path,
        copied: &mut HashSet<PathBuf>,
    ) -> Result<(), ProvisionError> {
        let source = self.template_root.join(&entry.source);
        let Some(name) = entry.destination_name() else {
            let err = io::Error::new(io::ErrorKind::InvalidInput, "entry has no file name");
            return Err(ProvisionError::copy_failed(&entry.source, source, err));
        };
        let destination = target_dir.join(name);

        log::debug!(
            "copying {:?} {} -> {}",
            entry.kind,
            source.display(),
            destination.display()
        );

        let fail = |path: &Path, err: io::Error| {
            ProvisionError::copy_failed(&entry.source, path.to_path_buf(), err)
        };

        let metadata = fs::metadata(&source).map_err(|e| fail(&source, e))?;
        match entry.kind {
            EntryKind::File => {
                if !metadata.is_file() {
                    let err = io::Error::new(io::ErrorKind::InvalidInput, "expected a file");
                    return Err(fail(&source, err));
                }
                copy_file(&source, &destination, copied).map_err(|(p, e)| fail(&p, e))
            }
            EntryKind::Directory => {
                if !metadata.is_dir() {
                    let err = io::Error::new(io::ErrorKind::InvalidInput, "expected a directory");
                    return Err(fail(&source, err));
                }
                copy_tree(&source, &destination, copied).map_err(|(p, e)| fail(&p, e))
            }
        }
    }
}

/// Copies one file, refusing to replace an existing destination.
///
/// The destination is opened with `create_new`, so the no-overwrite rule
/// holds even if something appears at that path concurrently.
fn copy_file(
    source: &Path,
    destination: &Path,
    copied: &mut HashSet<PathBuf>,
) -> Result<(), (PathBuf, io::Error)> {
    let mut reader = File::open(source).map_err(|e| (source.to_path_buf(), e))?;
    let permissions = reader
        .metadata()
        .map_err(|e| (source.to_path_buf(), e))?
        .permissions();

    let fail = |e| (destination.to_path_buf(), e);
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .map_err(fail)?;
    io::copy(&mut reader, &mut writer).map_err(fail)?;
    writer.set_permissions(permissions).map_err(fail)?;

    copied.insert(destination.to_path_buf());
    Ok(())
}

/// Recursively copies `source` into a new directory at `destination`.
///
/// Entries are visited in file-name order, each directory before its
/// contents. An existing destination at any level is an error rather than a
/// merge.
fn copy_tree(
    source: &Path,
    destination: &Path,
    copied: &mut HashSet<PathBuf>,
) -> Result<(), (PathBuf, io::Error)> {
    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| source.to_path_buf(), Path::to_path_buf);
            (path, io::Error::from(e))
        })?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| (entry.path().to_path_buf(), io::Error::other(e)))?;
        let to = if relative.as_os_str().is_empty() {
            destination.to_path_buf()
        } else {
            destination.join(relative)
        };

        if entry.file_type().is_dir() {
            fs::create_dir(&to).map_err(|e| (to.clone(), e))?;
        } else {
            copy_file(entry.path(), &to, copied)?;
        }
    }

    Ok(())
}

/// Writes an artifact, overwriting only a file copied during this run.
fn write_artifact(
    artifact: &GeneratedArtifact,
    target_dir: &Path,
    copied: &HashSet<PathBuf>,
) -> Result<(), ProvisionError> {
    let path = target_dir.join(&artifact.path);
    log::debug!("writing {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ProvisionError::write_failed(path.clone(), e))?;
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if copied.contains(&path) {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    options
        .open(&path)
        .and_then(|mut file| file.write_all(artifact.content.as_bytes()))
        .map_err(|e| ProvisionError::write_failed(path.clone(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::manifest::OptionalModule;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("oegen_test_{}", rand::random::<u64>()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cleanup(path: &Path) {
        let _ = fs::remove_dir_all(path);
    }

    /// Builds `<root>/templates` with `readme.txt`, `assets/` and `editor/`.
    fn template_root(root: &Path) -> PathBuf {
        let templates = root.join("templates");
        fs::create_dir_all(templates.join("assets").join("textures")).unwrap();
        fs::create_dir_all(templates.join("editor")).unwrap();
        fs::write(templates.join("readme.txt"), "read me\n").unwrap();
        fs::write(templates.join("assets").join("level.json"), "{}").unwrap();
        fs::write(
            templates.join("assets").join("textures").join("grass.png"),
            [0x89, b'P', b'N', b'G', 0, 1, 2],
        )
        .unwrap();
        fs::write(templates.join("editor").join("layout.ini"), "[dock]\n").unwrap();
        templates
    }

    fn demo_manifest() -> TemplateManifest {
        TemplateManifest {
            entries: vec![
                TemplateEntry::file("readme.txt"),
                TemplateEntry::directory("assets"),
            ],
            artifacts: Vec::new(),
            modules: vec![OptionalModule {
                name: String::from("editor"),
                description: String::new(),
                entries: vec![TemplateEntry::directory("editor")],
                artifacts: vec![
                    GeneratedArtifact::new("registry.json", "{\n  \"version\": 1\n}\n"),
                    GeneratedArtifact::new("src/registry.odin", "package main\n"),
                ],
            }],
        }
    }

    fn out_dir(root: &Path) -> PathBuf {
        let out = root.join("out");
        fs::create_dir_all(&out).unwrap();
        out
    }

    #[test]
    fn resolve_project_name_defaults_empty_and_whitespace() {
        assert_eq!(resolve_project_name(""), DEFAULT_PROJECT_NAME);
        assert_eq!(resolve_project_name("   \t"), DEFAULT_PROJECT_NAME);
        assert_eq!(resolve_project_name("Demo"), "Demo");
        assert_eq!(resolve_project_name(" spaced name "), " spaced name ");
    }

    #[test]
    fn provision_copies_file_and_tree() {
        let root = temp_dir();
        let templates = template_root(&root);
        let manifest = demo_manifest();
        let request = ProvisionRequest::new(out_dir(&root), "Demo");

        let project = Provisioner::new(&templates, &manifest)
            .provision(&request)
            .unwrap();

        assert_eq!(project, root.join("out").join("Demo"));
        assert_eq!(
            fs::read(project.join("readme.txt")).unwrap(),
            fs::read(templates.join("readme.txt")).unwrap()
        );
        assert_eq!(
            fs::read(project.join("assets").join("textures").join("grass.png")).unwrap(),
            [0x89, b'P', b'N', b'G', 0, 1, 2]
        );
        assert!(project.join("assets").join("level.json").is_file());
        assert!(!project.join("editor").exists());
        assert!(!project.join("registry.json").exists());

        cleanup(&root);
    }

    #[test]
    fn provision_uses_default_name_when_blank() {
        let root = temp_dir();
        let templates = template_root(&root);
        let manifest = demo_manifest();
        let request = ProvisionRequest::new(out_dir(&root), "  ");

        let project = Provisioner::new(&templates, &manifest)
            .provision(&request)
            .unwrap();

        assert_eq!(project.file_name().unwrap(), DEFAULT_PROJECT_NAME);
        cleanup(&root);
    }

    #[test]
    fn provision_fails_when_target_exists_without_touching_it() {
        let root = temp_dir();
        let templates = template_root(&root);
        let manifest = demo_manifest();
        let out = out_dir(&root);
        fs::create_dir_all(out.join("Demo")).unwrap();
        fs::write(out.join("Demo").join("mine.txt"), "keep").unwrap();

        let err = Provisioner::new(&templates, &manifest)
            .provision(&ProvisionRequest::new(&out, "Demo"))
            .unwrap_err();

        assert!(matches!(err, ProvisionError::DirectoryAlreadyExists { .. }));
        let names: Vec<_> = fs::read_dir(out.join("Demo"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, ["mine.txt"]);

        cleanup(&root);
    }

    #[test]
    fn provision_twice_never_merges() {
        let root = temp_dir();
        let templates = template_root(&root);
        let manifest = demo_manifest();
        let request = ProvisionRequest::new(out_dir(&root), "Demo");
        let provisioner = Provisioner::new(&templates, &manifest);

        let project = provisioner.provision(&request).unwrap();
        fs::write(project.join("readme.txt"), "edited").unwrap();

        let err = provisioner.provision(&request).unwrap_err();
        assert!(matches!(err, ProvisionError::DirectoryAlreadyExists { path } if path == project));
        assert_eq!(fs::read_to_string(project.join("readme.txt")).unwrap(), "edited");

        cleanup(&root);
    }

    #[test]
    fn provision_with_module_adds_entries_and_artifacts() {
        let root = temp_dir();
        let templates = template_root(&root);
        let manifest = demo_manifest();
        let request = ProvisionRequest::new(out_dir(&root), "Demo").with_module("editor");

        let project = Provisioner::new(&templates, &manifest)
            .provision(&request)
            .unwrap();

        assert_eq!(
            fs::read_to_string(project.join("editor").join("layout.ini")).unwrap(),
            "[dock]\n"
        );
        assert_eq!(
            fs::read_to_string(project.join("registry.json")).unwrap(),
            "{\n  \"version\": 1\n}\n"
        );
        assert_eq!(
            fs::read_to_string(project.join("src").join("registry.odin")).unwrap(),
            "package main\n"
        );

        cleanup(&root);
    }

    #[test]
    fn provision_rejects_unknown_module_before_creating_anything() {
        let root = temp_dir();
        let templates = template_root(&root);
        let manifest = demo_manifest();
        let request = ProvisionRequest::new(out_dir(&root), "Demo").with_module("physics");

        let err = Provisioner::new(&templates, &manifest)
            .provision(&request)
            .unwrap_err();

        assert!(matches!(err, ProvisionError::UnknownModule { .. }));
        assert!(!root.join("out").join("Demo").exists());

        cleanup(&root);
    }

    #[test]
    fn provision_reports_missing_source_and_keeps_partial_output() {
        let root = temp_dir();
        let templates = template_root(&root);
        let mut manifest = demo_manifest();
        manifest.entries.push(TemplateEntry::directory("oengine"));

        let err = Provisioner::new(&templates, &manifest)
            .provision(&ProvisionRequest::new(out_dir(&root), "Demo"))
            .unwrap_err();

        match err {
            ProvisionError::CopyFailed { entry, path, source } => {
                assert_eq!(entry, "oengine");
                assert_eq!(path, templates.join("oengine"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        let project = root.join("out").join("Demo");
        assert!(project.join("readme.txt").is_file());
        assert!(project.join("assets").is_dir());

        cleanup(&root);
    }

    #[test]
    fn provision_rejects_kind_mismatch() {
        let root = temp_dir();
        let templates = template_root(&root);
        let manifest = TemplateManifest {
            entries: vec![TemplateEntry::file("assets")],
            artifacts: Vec::new(),
            modules: Vec::new(),
        };

        let err = Provisioner::new(&templates, &manifest)
            .provision(&ProvisionRequest::new(out_dir(&root), "Demo"))
            .unwrap_err();

        assert!(matches!(err, ProvisionError::CopyFailed { entry, .. } if entry == "assets"));
        cleanup(&root);
    }

    #[test]
    fn copy_tree_refuses_to_merge_into_existing_directory() {
        let root = temp_dir();
        let templates = template_root(&root);
        let destination = root.join("copy");
        fs::create_dir_all(&destination).unwrap();

        let mut copied = HashSet::new();
        let (path, err) = copy_tree(&templates.join("assets"), &destination, &mut copied)
            .unwrap_err();

        assert_eq!(path, destination);
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(copied.is_empty());

        cleanup(&root);
    }

    #[test]
    fn artifact_overwrites_only_copied_files() {
        let root = temp_dir();
        let project = root.join("project");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("copied.json"), "template").unwrap();
        fs::write(project.join("foreign.json"), "caller data").unwrap();

        let copied: HashSet<PathBuf> = [project.join("copied.json")].into_iter().collect();

        write_artifact(&GeneratedArtifact::new("copied.json", "generated"), &project, &copied)
            .unwrap();
        assert_eq!(
            fs::read_to_string(project.join("copied.json")).unwrap(),
            "generated"
        );

        let err = write_artifact(
            &GeneratedArtifact::new("foreign.json", "generated"),
            &project,
            &copied,
        )
        .unwrap_err();
        assert!(matches!(err, ProvisionError::WriteFailed { .. }));
        assert_eq!(
            fs::read_to_string(project.join("foreign.json")).unwrap(),
            "caller data"
        );

        cleanup(&root);
    }

    #[test]
    fn artifact_creates_parent_directories() {
        let root = temp_dir();
        write_artifact(
            &GeneratedArtifact::new("a/b/c.txt", "deep"),
            &root,
            &HashSet::new(),
        )
        .unwrap();
        assert_eq!(
            fs::read_to_string(root.join("a").join("b").join("c.txt")).unwrap(),
            "deep"
        );
        cleanup(&root);
    }

    #[test]
    fn builtin_manifest_provisions_full_engine_layout() {
        let root = temp_dir();
        let templates = root.join("engine");
        for dir in [
            "resources",
            "macos",
            "macos-arm64",
            "assets",
            "linux",
            "oengine",
            "src",
            "windows",
            "editor",
        ] {
            fs::create_dir_all(templates.join(dir)).unwrap();
            fs::write(templates.join(dir).join(".keep"), dir).unwrap();
        }
        for file in ["ols.json", "odinfmt.json", "run.py"] {
            fs::write(templates.join(file), file).unwrap();
        }
        let manifest = TemplateManifest::builtin();
        let request = ProvisionRequest::new(out_dir(&root), "").with_module("editor");

        let project = Provisioner::new(&templates, &manifest)
            .provision(&request)
            .unwrap();

        assert!(project.ends_with(DEFAULT_PROJECT_NAME));
        assert_eq!(fs::read_to_string(project.join("run.py")).unwrap(), "run.py");
        assert!(project.join("macos-arm64").join(".keep").is_file());
        assert!(project.join("editor").join(".keep").is_file());
        assert!(project.join("src").join("editor_main.odin").is_file());
        assert_eq!(
            fs::read_to_string(project.join("registry.json")).unwrap(),
            crate::project::manifest::REGISTRY_JSON
        );
        assert_eq!(
            fs::read_to_string(project.join("src").join("editor_main.odin")).unwrap(),
            crate::project::manifest::EDITOR_MAIN_SOURCE
        );

        cleanup(&root);
    }

    /// Relative paths of every file and directory below `dir`.
    fn tree(dir: &Path) -> BTreeSet<String> {
        WalkDir::new(dir)
            .min_depth(1)
            .into_iter()
            .map(|e| {
                e.unwrap()
                    .path()
                    .strip_prefix(dir)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn provision_copies_only_manifest_entries() {
        let root = temp_dir();
        let templates = template_root(&root);
        fs::create_dir_all(templates.join("target").join("debug")).unwrap();
        fs::write(templates.join("target").join("debug").join("game"), "bin").unwrap();
        fs::write(templates.join("stray.log"), "log").unwrap();
        let manifest = demo_manifest();

        let project = Provisioner::new(&templates, &manifest)
            .provision(&ProvisionRequest::new(out_dir(&root), "Demo"))
            .unwrap();

        let expected: BTreeSet<String> = [
            "assets",
            "assets/level.json",
            "assets/textures",
            "assets/textures/grass.png",
            "readme.txt",
        ]
        .iter()
        .map(|p| (*p).to_string())
        .collect();
        assert_eq!(tree(&project), expected);

        cleanup(&root);
    }

    #[test]
    fn provision_rejects_names_outside_destination() {
        let root = temp_dir();
        let templates = template_root(&root);
        let manifest = demo_manifest();
        let out = out_dir(&root);
        let elsewhere = root.join("elsewhere");
        let provisioner = Provisioner::new(&templates, &manifest);

        for name in [elsewhere.to_string_lossy().into_owned(), String::from("../escaped")] {
            let err = provisioner
                .provision(&ProvisionRequest::new(&out, name.as_str()))
                .unwrap_err();
            assert!(
                matches!(&err, ProvisionError::InvalidProjectName { name: n } if *n == name),
                "unexpected error: {err}"
            );
        }

        assert!(!elsewhere.exists());
        assert!(!root.join("escaped").exists());
        assert!(tree(&out).is_empty());

        cleanup(&root);
    }

    #[test]
    fn provision_accepts_nested_relative_name() {
        let root = temp_dir();
        let templates = template_root(&root);
        let manifest = demo_manifest();
        let out = out_dir(&root);
        fs::create_dir_all(out.join("games")).unwrap();

        let project = Provisioner::new(&templates, &manifest)
            .provision(&ProvisionRequest::new(&out, "games/Demo"))
            .unwrap();

        assert_eq!(project, out.join("games").join("Demo"));
        assert!(project.join("readme.txt").is_file());

        cleanup(&root);
    }

    #[test]
    #[cfg(unix)]
    fn provision_treats_dangling_symlink_as_existing() {
        let root = temp_dir();
        let templates = template_root(&root);
        let manifest = demo_manifest();
        let out = out_dir(&root);
        std::os::unix::fs::symlink(root.join("missing"), out.join("Demo")).unwrap();

        let err = Provisioner::new(&templates, &manifest)
            .provision(&ProvisionRequest::new(&out, "Demo"))
            .unwrap_err();

        assert!(matches!(err, ProvisionError::DirectoryAlreadyExists { path } if path == out.join("Demo")));
        assert!(!root.join("missing").exists());

        cleanup(&root);
    }

    #[test]
    fn copy_file_never_overwrites() {
        let root = temp_dir();
        let templates = template_root(&root);
        let destination = root.join("readme.txt");
        fs::write(&destination, "mine").unwrap();

        let mut copied = HashSet::new();
        let (path, err) =
            copy_file(&templates.join("readme.txt"), &destination, &mut copied).unwrap_err();

        assert_eq!(path, destination);
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&destination).unwrap(), "mine");
        assert!(copied.is_empty());

        cleanup(&root);
    }

    #[test]
    #[cfg(unix)]
    fn copy_file_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let root = temp_dir();
        let source = root.join("run.sh");
        fs::write(&source, "exit 0\n").unwrap();
        fs::set_permissions(&source, fs::Permissions::from_mode(0o755)).unwrap();

        let destination = root.join("copy.sh");
        copy_file(&source, &destination, &mut HashSet::new()).unwrap();

        let mode = fs::metadata(&destination).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);

        cleanup(&root);
    }

    #[test]
    fn copy_tree_copies_nested_directories_and_records_files() {
        let root = temp_dir();
        let templates = template_root(&root);
        let destination = root.join("assets_copy");

        let mut copied = HashSet::new();
        copy_tree(&templates.join("assets"), &destination, &mut copied).unwrap();

        assert_eq!(
            fs::read(destination.join("textures").join("grass.png")).unwrap(),
            [0x89, b'P', b'N', b'G', 0, 1, 2]
        );
        let expected: HashSet<PathBuf> = [
            destination.join("level.json"),
            destination.join("textures").join("grass.png"),
        ]
        .into_iter()
        .collect();
        assert_eq!(copied, expected);

        cleanup(&root);
    }
}
