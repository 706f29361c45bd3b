//! Error types for the oegen CLI.
//!
//! Two enums live here:
//!
//! - [`ProvisionError`] is returned by the project provisioner. Every variant
//!   names the path or entry involved so the caller can show a meaningful
//!   message.
//! - [`OegenError`] covers the surrounding CLI concerns: locating the install
//!   root, loading the manifest, platform detection and launcher exit codes.
//!
//! Command plumbing wraps both in `anyhow::Result`; `main` downcasts to
//! [`OegenError::ProcessExitCode`] to forward a launched script's exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single `provision` call.
///
/// `DirectoryAlreadyExists`, `UnknownModule` and `InvalidProjectName` are
/// reported before the filesystem is touched. The remaining variants leave whatever was already
/// written in place; nothing is rolled back.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The destination project directory is already present.
    #[error("directory '{}' already exists", path.display())]
    DirectoryAlreadyExists {
        /// The project directory that was found.
        path: PathBuf,
    },

    /// A requested optional module is not part of the manifest.
    #[error("unknown optional module '{name}'")]
    UnknownModule {
        /// The requested module name.
        name: String,
    },

    /// The project name would place the project outside the destination.
    #[error("invalid project name '{name}': it must stay inside the destination directory")]
    InvalidProjectName {
        /// The rejected name.
        name: String,
    },

    /// The project directory itself could not be created.
    #[error("failed to create project directory '{}'", path.display())]
    CreateFailed {
        /// The project directory.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Copying a template entry failed.
    #[error("failed to copy template entry '{entry}' at '{}'", path.display())]
    CopyFailed {
        /// The manifest source name of the entry being copied.
        entry: String,
        /// The path that failed (source or destination).
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a generated artifact failed.
    #[error("failed to write generated file '{}'", path.display())]
    WriteFailed {
        /// The artifact destination.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ProvisionError {
    #[must_use]
    pub fn copy_failed(entry: impl Into<String>, path: PathBuf, source: std::io::Error) -> Self {
        Self::CopyFailed {
            entry: entry.into(),
            path,
            source,
        }
    }

    #[must_use]
    pub fn write_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::WriteFailed { path, source }
    }
}

/// Errors raised by the CLI around the provisioner and launcher.
#[derive(Debug, Error)]
pub enum OegenError {
    /// No install root could be located.
    #[error(
        "template root not found. Pass --templates <DIR> or set OENGINE_HOME to the engine checkout"
    )]
    TemplateRootNotFound,

    /// The template manifest could not be read or is invalid.
    #[error("manifest error: {message}")]
    ManifestError {
        /// Description of the manifest problem.
        message: String,
    },

    /// The current OS/architecture has no launcher scripts.
    #[error("unsupported platform: {os} on {arch}")]
    UnsupportedPlatform {
        /// `std::env::consts::OS`
        os: String,
        /// `std::env::consts::ARCH`
        arch: String,
    },

    /// The shell needed to run a launcher script is not on PATH.
    #[error("'{program}' not found in PATH")]
    InterpreterNotFound {
        /// The interpreter that was looked up.
        program: String,
    },

    /// Subprocess exited with non-zero code.
    ///
    /// The exit code is propagated to the parent process without printing
    /// additional error messages.
    #[error("process exited with code {code}")]
    ProcessExitCode {
        /// The exit code from the subprocess.
        code: i32,
    },
}

impl OegenError {
    /// Creates a new `ManifestError`.
    #[must_use]
    pub fn manifest_error(message: impl Into<String>) -> Self {
        Self::ManifestError {
            message: message.into(),
        }
    }

    /// Creates an `UnsupportedPlatform` error for the running host.
    #[must_use]
    pub fn unsupported_platform() -> Self {
        Self::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    /// Creates a new `ProcessExitCode` error.
    #[must_use]
    pub const fn process_exit_code(code: i32) -> Self {
        Self::ProcessExitCode { code }
    }
}
