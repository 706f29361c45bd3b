//! Project launcher.
//!
//! Picks the platform script folder of a project (optionally the editor or
//! debug variant), runs the script there, and reports its exit code.
//!
//! - [`platform`] - Host detection and script folder names
//! - [`command`] - Pure command resolution and the process spawn

pub mod command;
pub mod platform;

pub use command::{LaunchMode, launch, resolve_for_project, resolve_platform_command};
pub use platform::Platform;
