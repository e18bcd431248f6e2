//! Project types and requests

use crate::templates::manifest::{self, ScaffoldManifest};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Supported project types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Cli,
    Web,
    Api,
}

impl ProjectType {
    /// Every supported type, in listing order
    pub const ALL: [ProjectType; 3] = [ProjectType::Cli, ProjectType::Web, ProjectType::Api];

    /// Used whenever the requested identifier is not an exact match
    pub const DEFAULT: ProjectType = ProjectType::Cli;

    /// Resolve a type identifier.
    ///
    /// Total over all strings: anything that is not exactly `cli`, `web` or
    /// `api` (empty, `default`, different case, unknown) maps to [`Self::DEFAULT`].
    pub fn resolve(identifier: &str) -> Self {
        match identifier {
            "cli" => ProjectType::Cli,
            "web" => ProjectType::Web,
            "api" => ProjectType::Api,
            _ => Self::DEFAULT,
        }
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            ProjectType::Cli => "cli",
            ProjectType::Web => "web",
            ProjectType::Api => "api",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProjectType::Cli => "Command line application built with Cobra",
            ProjectType::Web => "Web server with HTML templates and static assets",
            ProjectType::Api => "REST API with JSON handlers and middleware",
        }
    }

    /// The scaffold manifest for this type
    pub fn manifest(&self) -> &'static ScaffoldManifest {
        match self {
            ProjectType::Cli => &manifest::CLI,
            ProjectType::Web => &manifest::WEB,
            ProjectType::Api => &manifest::API,
        }
    }

    /// Commands to run after the project is generated
    pub fn next_steps(&self, root: &Path) -> Vec<String> {
        match self {
            ProjectType::Cli => vec![
                format!("cd {}", root.display()),
                "go mod tidy".to_string(),
                "make run".to_string(),
            ],
            ProjectType::Web => vec![
                format!("cd {}", root.join("cmd").display()),
                "go run main.go".to_string(),
                "Visit http://localhost:8080".to_string(),
            ],
            ProjectType::Api => vec![
                format!("cd {}", root.join("cmd").display()),
                "go run main.go".to_string(),
                "curl http://localhost:8080/api/health".to_string(),
            ],
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// A single generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    /// Project name, used as the root directory and interpolated into files
    pub name: String,

    /// Requested type identifier, resolved with [`ProjectType::resolve`]
    pub project_type: String,
}

impl ProjectRequest {
    pub fn new(name: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_type: project_type.into(),
        }
    }

    pub fn resolved_type(&self) -> ProjectType {
        ProjectType::resolve(&self.project_type)
    }
}
