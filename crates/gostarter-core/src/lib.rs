//! gostarter core - scaffolding for Go starter projects
//!
//! Given a project name and a project type, this library writes a directory
//! tree of Go starter files with the name interpolated into their content.
//! Generation is all-or-nothing: on failure the project root is removed.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Templates** - Name rendering and one fixed manifest per project type
//! - **Layer 2: Generation** - `Generator` materializes a manifest over a `FileSystem`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based output (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based create command
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use gostarter_core::{generate, Error};
//!
//! match generate("demo", "api") {
//!     Ok(report) => println!("created {} files", report.files.len()),
//!     Err(Error::AlreadyExists { path }) => eprintln!("{} is taken", path.display()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod generator;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Settings;
pub use error::{Error, Operation, Result, Rollback};
pub use fs::{FileSystem, LocalFs};
pub use generator::{generate, GenerationReport, Generator};
pub use project::{ProjectRequest, ProjectType};
pub use templates::{render, select_manifest, ManifestPlan, ScaffoldManifest};

#[cfg(feature = "tui")]
pub use tui::run;
