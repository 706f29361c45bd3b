//! Command modules for the oegen CLI.
//!
//! ## Project Commands
//!
//! - [`new`] - Create a new Oengine project from the templates
//! - [`modules`] - List optional modules
//! - [`run`] - Start a project through its platform run script
//!
//! ## Installation Commands
//!
//! - [`doctor`] - Check the install root and templates
//! - [`version`] - Display version information

pub mod doctor;
pub mod modules;
pub mod new;
pub mod run;
pub mod version;
