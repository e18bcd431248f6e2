//! Error taxonomy for project generation
//!
//! An unknown project type is deliberately absent: it resolves to the default
//! manifest and is never reported.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using gostarter-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by project generation
#[derive(Error, Debug)]
pub enum Error {
    /// No project name was supplied (raised by the CLI before the core runs)
    #[error("project name required")]
    NameRequired,

    /// Something already exists at the target path; nothing was touched
    #[error("folder '{}' already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// The project root could not be created; nothing was left behind
    #[error("failed to create project folder '{}': {source}", path.display())]
    RootCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A manifest step failed after the root was created
    #[error("failed to {operation} '{}': {source}{rollback}", path.display())]
    MaterializationFailed {
        operation: Operation,
        path: PathBuf,
        #[source]
        source: io::Error,
        rollback: Rollback,
    },
}

impl Error {
    /// Create an already-exists error
    pub fn already_exists(path: impl Into<PathBuf>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Create a root creation error
    pub fn root_creation_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::RootCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Rollback outcome, if this error triggered one
    pub fn rollback(&self) -> Option<&Rollback> {
        match self {
            Self::MaterializationFailed { rollback, .. } => Some(rollback),
            _ => None,
        }
    }
}

/// The manifest step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateDirectory,
    WriteFile,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::CreateDirectory => write!(f, "create directory"),
            Operation::WriteFile => write!(f, "write file"),
        }
    }
}

/// Outcome of removing the created directories after a failed generation
#[derive(Debug)]
pub enum Rollback {
    /// Every directory the generation created was removed
    Completed,
    /// Removal failed; `root` may still be on disk
    Failed { root: PathBuf, source: io::Error },
}

impl Rollback {
    pub fn is_completed(&self) -> bool {
        matches!(self, Rollback::Completed)
    }

    pub(crate) fn failed(root: &Path, source: io::Error) -> Self {
        Rollback::Failed {
            root: root.to_path_buf(),
            source,
        }
    }
}

// Appended to the MaterializationFailed message; empty when the rollback completed.
impl fmt::Display for Rollback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rollback::Completed => Ok(()),
            Rollback::Failed { root, source } => write!(
                f,
                " (rollback failed, '{}' may be left behind: {})",
                root.display(),
                source
            ),
        }
    }
}
