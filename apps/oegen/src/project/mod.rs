//! Project management module.
//!
//! This module provides the template manifest and the provisioner that turns
//! it into a new Oengine project directory.
//!
//! ## Modules
//!
//! - [`manifest`] - Template entries, optional modules and `oegen.toml` parsing
//! - [`provision`] - Project creation from a manifest
//!
//! ## Key Types
//!
//! - [`TemplateManifest`] - The provisioning configuration
//! - [`Provisioner`] - Copies templates for a [`ProvisionRequest`]

pub mod manifest;
pub mod provision;

pub use manifest::{EntryKind, TemplateEntry, TemplateManifest};
pub use provision::{ProvisionRequest, Provisioner};
