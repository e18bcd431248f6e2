//! Templates for generated projects
//!
//! This module provides:
//! - The name renderer (`{{name}}` substitution, no escaping)
//! - One fixed scaffold manifest per project type
//! - Go toolchain compatibility checking for the generated `go.mod`

pub mod manifest;
pub mod render;
pub mod version;

pub use manifest::{
    select_manifest, DirectorySpec, FileSpec, ManifestEntry, ManifestPlan, PlannedEntry,
    ScaffoldManifest,
};
pub use render::{render, NAME_TOKEN};
pub use version::{check_compatibility, GO_DIRECTIVE};
