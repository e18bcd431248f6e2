//! Project generation with all-or-nothing semantics
//!
//! A generation either leaves the complete manifest on disk under the
//! project root or removes every directory it created, including missing
//! parents of the root.

use crate::error::{Error, Operation, Result, Rollback};
use crate::fs::{FileSystem, LocalFs};
use crate::project::{ProjectRequest, ProjectType};
use crate::templates::manifest::{resolve_path, ManifestEntry, ScaffoldManifest};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a successful generation created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// The project root
    pub root: PathBuf,

    /// The type whose manifest was used
    pub project_type: ProjectType,

    /// Created sub-directories, in manifest order
    pub directories: Vec<PathBuf>,

    /// Written files, in manifest order
    pub files: Vec<PathBuf>,
}

/// A manifest step that failed, before rollback
struct StepFailure {
    operation: Operation,
    path: PathBuf,
    source: io::Error,
}

/// Generates projects on a [`FileSystem`], relative to a base directory
#[derive(Debug, Clone)]
pub struct Generator<F: FileSystem = LocalFs> {
    fs: F,
    base_dir: PathBuf,
}

impl Generator<LocalFs> {
    /// A generator on the local disk, rooted at the working directory
    pub fn new() -> Self {
        Self::with_fs(LocalFs)
    }
}

impl Default for Generator<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> Generator<F> {
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            base_dir: PathBuf::new(),
        }
    }

    /// Create projects under `dir` instead of the working directory
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// The root directory a project called `name` would get
    pub fn root_for(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    pub fn generate_request(&self, request: &ProjectRequest) -> Result<GenerationReport> {
        self.generate(&request.name, &request.project_type)
    }

    /// Generate project `name` of type `project_type`.
    ///
    /// Unknown types silently use the default manifest. Fails without
    /// touching anything if the root already exists; any failure after the
    /// root was created removes it again.
    pub fn generate(&self, name: &str, project_type: &str) -> Result<GenerationReport> {
        let root = self.root_for(name);

        if self.fs.exists(&root) {
            return Err(Error::already_exists(root));
        }

        info!(root = %root.display(), "Creating project folder");
        let created = self.create_root(&root)?;

        let project_type = ProjectType::resolve(project_type);
        let manifest = project_type.manifest();
        debug!(project_type = %project_type, entries = manifest.entries.len(), "Selected manifest");

        match self.materialize(&root, name, manifest) {
            Ok(report) => {
                info!(
                    root = %report.root.display(),
                    files = report.files.len(),
                    "Project created"
                );
                Ok(report)
            }
            Err(failure) => {
                warn!(
                    path = %failure.path.display(),
                    error = %failure.source,
                    "Generation failed, removing project folder"
                );
                let rollback = self.rollback(&created);
                Err(Error::MaterializationFailed {
                    operation: failure.operation,
                    path: failure.path,
                    source: failure.source,
                    rollback,
                })
            }
        }
    }

    /// Create the root and any missing ancestors.
    ///
    /// Returns the topmost directory this call created, which is what
    /// rollback removes. If creation fails, the ancestors created here are
    /// removed again.
    fn create_root(&self, root: &Path) -> Result<PathBuf> {
        let created = self.topmost_missing(root);

        if let Some(parent) = root.parent() {
            if created.as_path() != root {
                debug!(parent = %parent.display(), "Creating missing parent directories");
                if let Err(e) = self.fs.create_dir_all(parent) {
                    self.discard_parents(&created, root);
                    return Err(Error::root_creation_failed(root, e));
                }
            }
        }

        if let Err(e) = self.fs.create_dir(root) {
            if e.kind() == io::ErrorKind::AlreadyExists {
                return Err(Error::already_exists(root));
            }
            self.discard_parents(&created, root);
            return Err(Error::root_creation_failed(root, e));
        }

        Ok(created)
    }

    /// The highest ancestor of `root` (or `root` itself) that does not exist yet
    fn topmost_missing(&self, root: &Path) -> PathBuf {
        root.ancestors()
            .skip(1)
            .take_while(|dir| !dir.as_os_str().is_empty() && !self.fs.exists(dir))
            .last()
            .unwrap_or(root)
            .to_path_buf()
    }

    /// Best-effort removal of parents created for a root that never materialized
    fn discard_parents(&self, created: &Path, root: &Path) {
        if created != root {
            if let Err(e) = self.fs.remove_dir_all(created) {
                warn!(path = %created.display(), error = %e, "Failed to remove created parents");
            }
        }
    }

    fn materialize(
        &self,
        root: &Path,
        name: &str,
        manifest: &ScaffoldManifest,
    ) -> std::result::Result<GenerationReport, StepFailure> {
        let mut report = GenerationReport {
            root: root.to_path_buf(),
            project_type: manifest.project_type,
            directories: Vec::new(),
            files: Vec::new(),
        };

        for entry in manifest.entries {
            let path = resolve_path(root, entry.path());
            let result = match entry {
                ManifestEntry::Directory(_) => self.fs.create_dir_all(&path),
                ManifestEntry::File(file) => self.fs.write(&path, file.render(name).as_bytes()),
            };

            let operation = match entry {
                ManifestEntry::Directory(_) => Operation::CreateDirectory,
                ManifestEntry::File(_) => Operation::WriteFile,
            };

            if let Err(source) = result {
                return Err(StepFailure {
                    operation,
                    path,
                    source,
                });
            }

            debug!(path = %path.display(), "{}", operation);
            match operation {
                Operation::CreateDirectory => report.directories.push(path),
                Operation::WriteFile => report.files.push(path),
            }
        }

        Ok(report)
    }

    /// Remove the topmost created directory once; a failure is returned, not retried
    fn rollback(&self, root: &Path) -> Rollback {
        match self.fs.remove_dir_all(root) {
            Ok(()) => Rollback::Completed,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "Rollback failed");
                Rollback::failed(root, e)
            }
        }
    }
}

/// Generate project `name` in the working directory on the local disk
pub fn generate(name: &str, project_type: &str) -> Result<GenerationReport> {
    Generator::new().generate(name, project_type)
}
