//! Install root resolution.
//!
//! The install root is the engine checkout that holds the template sources
//! (`oengine/`, `assets/`, platform script folders, ...). It is located using
//! the following priority order:
//!
//! 1. An explicit `--templates <DIR>` argument
//! 2. The `OENGINE_HOME` environment variable
//! 3. The nearest ancestor of the running executable that looks like an
//!    install root (contains `oengine/` or `oegen.toml`)

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use crate::errors::OegenError;
use crate::project::manifest::MANIFEST_FILE;

/// Environment variable to override the install root.
pub const OENGINE_HOME_ENV: &str = "OENGINE_HOME";

/// Directory whose presence marks an engine checkout.
const ENGINE_DIR: &str = "oengine";

/// Locates the install root.
///
/// # Errors
///
/// Returns an error if:
/// - `explicit` or `OENGINE_HOME` names something that is not a directory
/// - No ancestor of the executable looks like an install root
pub fn find_template_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_dir() {
            bail!("Template directory '{}' does not exist", path.display());
        }
        return Ok(path.to_path_buf());
    }

    if let Ok(home) = std::env::var(OENGINE_HOME_ENV) {
        let path = PathBuf::from(home);
        if path.is_dir() {
            return Ok(path);
        }
        bail!(
            "{OENGINE_HOME_ENV} environment variable set to '{}', but directory does not exist",
            path.display()
        );
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(root) = exe.parent().and_then(find_install_root_from)
    {
        log::debug!("install root found next to executable: {}", root.display());
        return Ok(root);
    }

    Err(OegenError::TemplateRootNotFound.into())
}

/// Returns the nearest of `start` and its ancestors that is an install root.
#[must_use]
pub fn find_install_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_install_root(dir))
        .map(Path::to_path_buf)
}

/// Whether `dir` contains the engine folder or a manifest file.
#[must_use]
pub fn is_install_root(dir: &Path) -> bool {
    dir.join(ENGINE_DIR).is_dir() || dir.join(MANIFEST_FILE).is_file()
}
