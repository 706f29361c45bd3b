//! Platform detection for the launcher.
//!
//! Each variant maps to the folder of run scripts shipped with a project:
//!
//! - Windows (`windows`)
//! - Linux (`linux`)
//! - macOS on Intel (`macos`)
//! - macOS on Apple Silicon (`macos-arm64`)

use std::fmt;

use crate::errors::OegenError;

/// A platform with its own folder of run scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    Macos,
    MacosArm64,
}

impl Platform {
    /// Detects the current platform based on compile-time configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OegenError::UnsupportedPlatform`] on any other OS.
    pub fn detect() -> Result<Self, OegenError> {
        #[cfg(target_os = "windows")]
        {
            return Ok(Self::Windows);
        }

        #[cfg(target_os = "linux")]
        {
            return Ok(Self::Linux);
        }

        #[cfg(all(target_os = "macos", target_arch = "aarch64"))]
        {
            return Ok(Self::MacosArm64);
        }

        #[cfg(all(target_os = "macos", not(target_arch = "aarch64")))]
        {
            return Ok(Self::Macos);
        }

        #[allow(unreachable_code)]
        {
            Err(OegenError::unsupported_platform())
        }
    }

    /// Name of the script folder for this platform.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Macos => "macos",
            Self::MacosArm64 => "macos-arm64",
        }
    }

    /// Platform to fall back to when this one's folder is missing.
    ///
    /// Older projects only ship `macos/`, which also runs on Apple Silicon.
    #[must_use]
    pub fn fallback(self) -> Option<Self> {
        match self {
            Self::MacosArm64 => Some(Self::Macos),
            Self::Windows | Self::Linux | Self::Macos => None,
        }
    }

    /// Extension of run scripts on this platform.
    #[must_use]
    pub fn script_extension(self) -> &'static str {
        match self {
            Self::Windows => "bat",
            Self::Linux | Self::Macos | Self::MacosArm64 => "sh",
        }
    }

    #[must_use]
    pub fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
